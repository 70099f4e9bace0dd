use std::{collections::BTreeMap, fmt::Write};

use crate::{bindings::source::VariableSource, error::BindingError,
            interpreter::lexer::is_valid_identifier};

/// Constants bound in every table created with [`VarTable::with_constants`].
pub const CONSTANTS: &[(&str, f64)] = &[("pi", std::f64::consts::PI), ("e", std::f64::consts::E)];

/// A table of named numeric variables.
///
/// Names are unique; adding an existing name overwrites its value. Iteration
/// and [`VarTable::info`] list variables in name order.
///
/// # Example
/// ```
/// use shunt::bindings::{VarTable, VariableSource};
///
/// let mut vars = VarTable::new();
/// vars.add("x", 10.0).unwrap();
/// vars.add("x", 12.5).unwrap();
///
/// assert_eq!(vars.get("x"), Some(12.5));
/// assert!(vars.add("2x", 1.0).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VarTable {
    variables: BTreeMap<String, f64>,
}

impl VarTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding `pi` and `e`.
    #[must_use]
    pub fn with_constants() -> Self {
        Self { variables: CONSTANTS.iter()
                                   .map(|(name, value)| ((*name).to_string(), *value))
                                   .collect(), }
    }

    /// Binds `name` to `value`, replacing any previous value.
    ///
    /// # Errors
    /// `BindingError::InvalidName` if `name` is not an identifier.
    pub fn add(&mut self, name: &str, value: f64) -> Result<(), BindingError> {
        if !is_valid_identifier(name) {
            return Err(BindingError::InvalidName { name: name.to_string() });
        }
        self.variables.insert(name.to_string(), value);
        Ok(())
    }

    /// Unbinds `name` and returns its last value.
    ///
    /// # Errors
    /// `BindingError::UnknownVariable` if `name` is not bound.
    pub fn remove(&mut self, name: &str) -> Result<f64, BindingError> {
        self.variables
            .remove(name)
            .ok_or_else(|| BindingError::UnknownVariable { name: name.to_string() })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// One `name = value` line per variable.
    #[must_use]
    pub fn info(&self) -> String {
        if self.variables.is_empty() {
            return "No variables added.\n".to_string();
        }
        self.iter().fold(String::new(), |mut out, (name, value)| {
                       let _ = writeln!(out, "{name} = {value}");
                       out
                   })
    }
}

impl VariableSource for VarTable {
    fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }
}
