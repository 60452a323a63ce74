//! Output formatting: the usage line and the six-decimal result line.

/// Fixed usage line, printed to stdout on any argument-count failure.
#[must_use]
pub fn usage() -> &'static str {
    "Invalid call. Usage: bcalc (number) [+,-,*,/] (number)"
}

/// Format an integer result the way C's `printf("%f", (double)v)` does:
/// six digits after the decimal point.
///
/// Values beyond 2^53 lose precision in the float cast, same as the
/// reference's `(double)` cast.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_result(value: i64) -> String {
    format!("{:.6}", value as f64)
}
