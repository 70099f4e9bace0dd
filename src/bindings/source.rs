use std::collections::HashMap;

use crate::error::DomainError;

/// A unary function that can be bound to a name.
///
/// Functions report arguments outside their domain through [`DomainError`];
/// the evaluator turns that into a runtime error pointing at the call.
pub type UnaryFunction = fn(f64) -> Result<f64, DomainError>;

/// Read access to variable bindings.
///
/// The engine only ever asks whether a name is bound and what its current
/// value is. It keeps no reference to the bindings between calls.
pub trait VariableSource {
    /// Returns `true` if `name` is bound to a value.
    fn contains(&self, name: &str) -> bool;

    /// The current value of `name`, or `None` if it is not bound.
    fn get(&self, name: &str) -> Option<f64>;
}

/// Read access to function bindings.
pub trait FunctionSource {
    /// Returns `true` if `name` is bound to a function.
    fn contains(&self, name: &str) -> bool;

    /// The function bound to `name`, or `None` if it is not bound.
    fn get(&self, name: &str) -> Option<UnaryFunction>;
}

impl VariableSource for HashMap<String, f64> {
    fn contains(&self, name: &str) -> bool {
        self.contains_key(name)
    }

    fn get(&self, name: &str) -> Option<f64> {
        Self::get(self, name).copied()
    }
}

impl FunctionSource for HashMap<String, UnaryFunction> {
    fn contains(&self, name: &str) -> bool {
        self.contains_key(name)
    }

    fn get(&self, name: &str) -> Option<UnaryFunction> {
        Self::get(self, name).copied()
    }
}
