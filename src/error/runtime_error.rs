use thiserror::Error;

use crate::error::SourcePointer;

/// Represents all errors that can occur while calculating an expression.
///
/// Errors raised while replaying a specific token point at that token in the
/// expression text. `ExtraOperands` and `EmptyResult` describe the sequence as
/// a whole and carry no position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A variable that was bound when the expression was built is gone.
    #[error("Unknown variable '{name}'.\n{at}")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// Where it is used.
        at:   SourcePointer,
    },
    /// A function that was bound when the expression was built is gone.
    #[error("Unknown function '{name}'.\n{at}")]
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// Where it is called.
        at:   SourcePointer,
    },
    /// An operator or function found fewer operands than it needs.
    #[error("Missing operand for '{operator}'.\n{at}")]
    MissingOperand {
        /// The operator or function name.
        operator: String,
        /// Where the operator is.
        at:       SourcePointer,
    },
    /// More than one value was left once the sequence was exhausted.
    #[error("Extra operands left on the stack ({count} values instead of one); the expression structure is invalid.")]
    ExtraOperands {
        /// How many values were left.
        count: usize,
    },
    /// Nothing was left once the sequence was exhausted.
    #[error("Empty expression result.")]
    EmptyResult,
    /// Attempted division by zero.
    #[error("Division by zero.\n{at}")]
    DivisionByZero {
        /// The `/` operator.
        at: SourcePointer,
    },
    /// An operator token whose text is not a known operation.
    #[error("Unknown operator '{operator}'.\n{at}")]
    UnknownOperator {
        /// The operator text.
        operator: String,
        /// Where the operator is.
        at:       SourcePointer,
    },
    /// A number token whose text is not a valid floating-point literal.
    #[error("Invalid number literal '{literal}'.\n{at}")]
    InvalidNumber {
        /// The literal as written.
        literal: String,
        /// Where it starts.
        at:      SourcePointer,
    },
    /// A token that has no meaning in a postfix sequence, such as a bracket.
    #[error("Unexpected token '{lexeme}' in postfix sequence.\n{at}")]
    UnexpectedToken {
        /// The token text.
        lexeme: String,
        /// Where it starts.
        at:     SourcePointer,
    },
    /// A bound function rejected its argument.
    #[error("Function '{function}' failed: {reason}.\n{at}")]
    Domain {
        /// The function name.
        function: String,
        /// Why the argument was rejected.
        reason:   String,
        /// Where the function is called.
        at:       SourcePointer,
    },
}

impl RuntimeError {
    /// The position this error points at, if it has one.
    #[must_use]
    pub const fn pointer(&self) -> Option<&SourcePointer> {
        match self {
            Self::UnknownVariable { at, .. }
            | Self::UnknownFunction { at, .. }
            | Self::MissingOperand { at, .. }
            | Self::DivisionByZero { at }
            | Self::UnknownOperator { at, .. }
            | Self::InvalidNumber { at, .. }
            | Self::UnexpectedToken { at, .. }
            | Self::Domain { at, .. } => Some(at),
            Self::ExtraOperands { .. } | Self::EmptyResult => None,
        }
    }
}
