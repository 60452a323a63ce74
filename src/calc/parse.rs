//! Operand parsing: best-effort leading-integer extraction.

/// Extract the leading integer from a textual operand.
///
/// Same contract as C's `atoi`, made explicit:
///
/// 1. Skip leading ASCII whitespace.
/// 2. Accept one optional `+` or `-` sign.
/// 3. Consume decimal digits until the first non-digit.
/// 4. No digits consumed → 0. Non-numeric operands silently become zero;
///    this permissive policy is part of the program's contract.
///
/// Accumulation saturates at the `i64` range instead of overflowing.
#[must_use]
pub fn leading_int(text: &str) -> i64 {
    let trimmed = text.trim_start_matches(|c: char| c.is_ascii_whitespace());

    let (negative, digits) = match trimmed.strip_prefix(['-', '+']) {
        Some(rest) => (trimmed.starts_with('-'), rest),
        None => (false, trimmed),
    };

    // Accumulate in the sign's direction so i64::MIN parses exactly.
    let mut value: i64 = 0;
    for c in digits.chars() {
        let Some(d) = c.to_digit(10) else { break };
        let digit = i64::from(d);
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}
