use log::trace;

use crate::{
    bindings::{FunctionSource, VariableSource},
    error::{RuntimeError, SourcePointer},
    interpreter::evaluator::{binary::eval_binary, unary::eval_unary},
    token::{Category, Token},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Replays a postfix sequence and returns its value.
///
/// Numbers and variables are pushed onto a value stack; operators and
/// functions pop their operands and push the result. Variables and functions
/// are looked up in the bindings at the moment they are replayed, so the same
/// sequence can be calculated again after values change.
///
/// # Parameters
/// - `postfix`: Tokens in Reverse Polish order.
/// - `source`: The expression the tokens came from, for diagnostics.
/// - `vars`, `funcs`: Current bindings.
///
/// # Returns
/// The single value left on the stack.
///
/// # Errors
/// - `DivisionByZero` for `/` with a zero right operand.
/// - `UnknownVariable` / `UnknownFunction` for names that are no longer
///   bound.
/// - `Domain` if a bound function rejects its argument.
/// - `MissingOperand`, `ExtraOperands` or `EmptyResult` if the sequence is
///   not well formed.
///
/// # Example
/// ```
/// use shunt::{
///     bindings::{FunctionTable, VarTable},
///     interpreter::evaluator::core::evaluate,
///     token::{Category, Token},
/// };
///
/// // 2 3 - abs
/// let postfix = [Token::new(Category::Number, "2", 2),
///                Token::new(Category::Number, "3", 6),
///                Token::new(Category::BinaryOperator, "-", 4),
///                Token::new(Category::UnaryOperator, "abs", 8)];
///
/// let value = evaluate(&postfix, "| 2 - 3 |", &VarTable::new(), &FunctionTable::new()).unwrap();
/// assert_eq!(value, 1.0);
/// ```
pub fn evaluate<V, F>(postfix: &[Token], source: &str, vars: &V, funcs: &F) -> EvalResult<f64>
    where V: VariableSource + ?Sized,
          F: FunctionSource + ?Sized
{
    let mut stack = ValueStack { values: Vec::with_capacity(postfix.len()),
                                 source };

    for token in postfix {
        let at = || SourcePointer::new(source, token.offset);

        let value = match token.category {
            Category::Number => {
                token.text
                     .parse::<f64>()
                     .map_err(|_| RuntimeError::InvalidNumber { literal: token.text.clone(),
                                                                at:      at(), })?
            },
            Category::Variable => {
                vars.get(&token.text)
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: token.text.clone(),
                                                                   at:   at(), })?
            },
            Category::Function => {
                let argument = stack.pop(token)?;
                let function =
                    funcs.get(&token.text)
                         .ok_or_else(|| RuntimeError::UnknownFunction { name: token.text.clone(),
                                                                        at:   at(), })?;
                function(argument).map_err(|e| RuntimeError::Domain { function:
                                                                          token.text.clone(),
                                                                      reason: e.to_string(),
                                                                      at: at() })?
            },
            Category::UnaryOperator => eval_unary(&token.text, stack.pop(token)?),
            Category::BinaryOperator => {
                let right = stack.pop(token)?;
                let left = stack.pop(token)?;
                eval_binary(&token.text, left, right).map_err(|fault| fault.at(token, source))?
            },
            _ => {
                return Err(RuntimeError::UnexpectedToken { lexeme: token.text.clone(),
                                                           at:     at(), });
            },
        };

        trace!("'{}' -> {value}", token.rpn_symbol());
        stack.values.push(value);
    }

    match stack.values.as_slice() {
        [value] => Ok(*value),
        [] => Err(RuntimeError::EmptyResult),
        rest => Err(RuntimeError::ExtraOperands { count: rest.len() }),
    }
}

/// The evaluation stack of a single `evaluate` call.
struct ValueStack<'a> {
    values: Vec<f64>,
    source: &'a str,
}

impl ValueStack<'_> {
    /// Pops the operand `token` needs, or reports it as missing.
    fn pop(&mut self, token: &Token) -> EvalResult<f64> {
        self.values
            .pop()
            .ok_or_else(|| RuntimeError::MissingOperand { operator: token.rpn_symbol()
                                                                         .to_string(),
                                                          at:       SourcePointer::new(self.source,
                                                                                       token.offset), })
    }
}
