/// Errors from the calculator domain layer.
use thiserror::Error;

/// Errors that can occur while evaluating an invocation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalcError {
    /// The right operand of a division was zero.
    #[error("division by zero: {lhs} / 0")]
    DivisionByZero {
        /// The dividend of the failed division.
        lhs: i64,
    },
}

/// Exit code mapping for `CalcError` variants.
impl CalcError {
    /// Return the CLI exit code for this error.
    ///
    /// Exit 1 is reserved for the wrong-argument-count usage failure.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::DivisionByZero { .. } => 2,
        }
    }
}
