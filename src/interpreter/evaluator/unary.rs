use crate::token::ABS;

/// Evaluates a unary operator on a value.
///
/// Supported operators:
/// - `-`: negation.
/// - `abs`: absolute value, produced by `|...|` in the source.
///
/// Any other operator text leaves the value unchanged.
///
/// # Example
/// ```
/// use shunt::interpreter::evaluator::unary::eval_unary;
///
/// assert_eq!(eval_unary("-", 5.0), -5.0);
/// assert_eq!(eval_unary("abs", -2.5), 2.5);
/// assert_eq!(eval_unary("+", 7.0), 7.0);
/// ```
#[must_use]
pub fn eval_unary(operator: &str, value: f64) -> f64 {
    match operator {
        "-" => -value,
        ABS => value.abs(),
        _ => value,
    }
}
