/// Operator selection and integer arithmetic.
use super::errors::CalcError;

/// The four supported arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Map an operator selector character to its operation.
    ///
    /// Returns `None` for anything outside `+ - * /`; the caller treats that
    /// as a deliberate no-op rather than an error.
    #[must_use]
    pub fn from_selector(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Apply the operation to two operands.
    ///
    /// Add/sub/mul wrap on overflow (two's-complement, like the reference's
    /// `int` math). Division truncates toward zero.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::DivisionByZero` when `rhs` is 0 for a division.
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<i64, CalcError> {
        match self {
            Self::Add => Ok(lhs.wrapping_add(rhs)),
            Self::Sub => Ok(lhs.wrapping_sub(rhs)),
            Self::Mul => Ok(lhs.wrapping_mul(rhs)),
            Self::Div => {
                if rhs == 0 {
                    Err(CalcError::DivisionByZero { lhs })
                } else {
                    Ok(lhs.wrapping_div(rhs))
                }
            }
        }
    }
}
