use thiserror::Error;

/// Represents all errors that can occur while maintaining binding tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// The name cannot be written as an identifier in an expression.
    #[error("'{name}' is not a valid identifier.")]
    InvalidName {
        /// The rejected name.
        name: String,
    },
    /// A function with this name is already bound.
    #[error("Function '{name}' is already defined.")]
    FunctionAlreadyDefined {
        /// The name of the function.
        name: String,
    },
    /// Tried to remove a variable that is not bound.
    #[error("Variable '{name}' not found.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Tried to remove a function that is not bound.
    #[error("Function '{name}' not found.")]
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
}

/// The reason a bound unary function rejected its argument.
///
/// # Example
/// ```
/// use shunt::error::DomainError;
///
/// let err = DomainError("square root of a negative number");
/// assert_eq!(err.to_string(), "square root of a negative number");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct DomainError(pub &'static str);
