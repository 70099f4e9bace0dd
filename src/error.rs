use thiserror::Error;

/// Binding table errors.
///
/// Raised when adding or removing variables and functions, and by bound
/// functions that reject an argument outside their domain.
pub mod binding_error;
/// Parsing errors.
///
/// Defines all error types that can occur during lexing, classification and
/// conversion of an expression. Parse errors are raised before any value is
/// computed.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while replaying a postfix
/// sequence, such as division by zero or bindings that disappeared after the
/// expression was built.
pub mod runtime_error;
/// Caret diagnostics.
///
/// Renders the source expression with a caret under the offending position.
pub mod source_pointer;

pub use binding_error::{BindingError, DomainError};
pub use parse_error::{BracketReason, ParseError, SyntaxReason};
pub use runtime_error::RuntimeError;
pub use source_pointer::SourcePointer;

/// Any error the crate can produce.
///
/// Library operations return the phase-specific error; the calculator and the
/// command line front-end use this umbrella type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Building an expression failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Calculating an expression failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// Changing a binding table failed.
    #[error(transparent)]
    Binding(#[from] BindingError),
    /// No stored expression has the requested index.
    #[error("Expression index out of range: {index} (there are {len} expressions).")]
    ExpressionIndexOutOfRange {
        /// The requested zero-based index.
        index: usize,
        /// How many expressions are stored.
        len:   usize,
    },
}
