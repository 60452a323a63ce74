/// Calculator domain: operand parsing, operator dispatch, arithmetic.
pub mod errors;
pub mod ops;
pub mod parse;

pub use errors::CalcError;
pub use ops::Operator;

/// Outcome of evaluating one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// A computed value to print.
    Value(i64),
    /// Unrecognized operator: by contract, no output and a success exit.
    NoOp,
}

/// Evaluate one invocation: parse both operands, select the operator by the
/// first character of `op`, apply it.
///
/// # Errors
///
/// Returns `CalcError::DivisionByZero` when dividing by a zero operand.
pub fn evaluate(lhs: &str, op: &str, rhs: &str) -> Result<Evaluation, CalcError> {
    let left = parse::leading_int(lhs);
    let right = parse::leading_int(rhs);

    match op.chars().next().and_then(Operator::from_selector) {
        Some(operator) => Ok(Evaluation::Value(operator.apply(left, right)?)),
        None => Ok(Evaluation::NoOp),
    }
}
