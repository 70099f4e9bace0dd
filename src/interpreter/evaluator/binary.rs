use crate::{
    error::{RuntimeError, SourcePointer},
    token::Token,
};

/// Why a binary operation produced no value.
///
/// Kept free of source positions so that [`eval_binary`] stays plain
/// arithmetic; [`BinaryFault::at`] attaches the operator's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryFault {
    /// `/` with a zero right operand.
    DivisionByZero,
    /// Operator text outside `+ - * / ^`.
    UnknownOperator,
}

impl BinaryFault {
    /// Turns the fault into a runtime error pointing at `token`.
    #[must_use]
    pub fn at(self, token: &Token, source: &str) -> RuntimeError {
        let at = SourcePointer::new(source, token.offset);
        match self {
            Self::DivisionByZero => RuntimeError::DivisionByZero { at },
            Self::UnknownOperator => RuntimeError::UnknownOperator { operator: token.text.clone(),
                                                                     at },
        }
    }
}

/// Evaluates a binary arithmetic operation.
///
/// `left` is the operand pushed first. Division by an exact zero is rejected
/// rather than producing an infinity.
///
/// # Example
/// ```
/// use shunt::interpreter::evaluator::binary::{BinaryFault, eval_binary};
///
/// assert_eq!(eval_binary("-", 7.0, 2.0), Ok(5.0));
/// assert_eq!(eval_binary("^", 2.0, 10.0), Ok(1024.0));
/// assert_eq!(eval_binary("/", 1.0, 0.0), Err(BinaryFault::DivisionByZero));
/// assert_eq!(eval_binary("%", 1.0, 2.0), Err(BinaryFault::UnknownOperator));
/// ```
pub fn eval_binary(operator: &str, left: f64, right: f64) -> Result<f64, BinaryFault> {
    match operator {
        "+" => Ok(left + right),
        "-" => Ok(left - right),
        "*" => Ok(left * right),
        "/" => {
            if right == 0.0 {
                return Err(BinaryFault::DivisionByZero);
            }
            Ok(left / right)
        },
        "^" => Ok(left.powf(right)),
        _ => Err(BinaryFault::UnknownOperator),
    }
}
