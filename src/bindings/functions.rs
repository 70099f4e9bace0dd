use std::{collections::BTreeMap, fmt::Write};

use crate::{
    bindings::source::{FunctionSource, UnaryFunction},
    error::{BindingError, DomainError},
    interpreter::lexer::is_valid_identifier,
};

/// Below this magnitude the cosine is treated as zero and the tangent as
/// undefined.
const TANGENT_POLE_EPSILON: f64 = 1e-10;

/// Defines the built-in functions by generating a lookup table.
///
/// Each entry maps a name to a function pointer. The macro produces
/// `BUILTIN_TABLE`, used to seed [`FunctionTable::with_builtins`], and the
/// public `BUILTIN_FUNCTIONS` list of names.
macro_rules! builtin_functions {
    ($($name:literal => $func:expr),* $(,)?) => {
        static BUILTIN_TABLE: &[(&str, UnaryFunction)] = &[
            $(($name, $func as UnaryFunction),)*
        ];
        /// Names of the functions bound by [`FunctionTable::with_builtins`].
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"  => sin,
    "cos"  => cos,
    "tg"   => tg,
    "ln"   => ln,
    "sqrt" => sqrt,
}

/// Sine of an angle in radians.
pub fn sin(x: f64) -> Result<f64, DomainError> {
    Ok(x.sin())
}

/// Cosine of an angle in radians.
pub fn cos(x: f64) -> Result<f64, DomainError> {
    Ok(x.cos())
}

/// Tangent of an angle in radians.
///
/// # Errors
/// Fails where the cosine vanishes.
///
/// # Example
/// ```
/// use shunt::bindings::functions::tg;
///
/// assert!((tg(std::f64::consts::FRAC_PI_4).unwrap() - 1.0).abs() < 1e-12);
/// assert!(tg(std::f64::consts::FRAC_PI_2).is_err());
/// ```
pub fn tg(x: f64) -> Result<f64, DomainError> {
    let cos = x.cos();
    if cos.abs() < TANGENT_POLE_EPSILON {
        return Err(DomainError("tangent is undefined"));
    }
    Ok(x.sin() / cos)
}

/// Natural logarithm.
///
/// # Errors
/// Fails for non-positive arguments.
pub fn ln(x: f64) -> Result<f64, DomainError> {
    if x <= 0.0 {
        return Err(DomainError("logarithm of a non-positive number"));
    }
    Ok(x.ln())
}

/// Square root.
///
/// # Errors
/// Fails for negative arguments.
pub fn sqrt(x: f64) -> Result<f64, DomainError> {
    if x < 0.0 {
        return Err(DomainError("square root of a negative number"));
    }
    Ok(x.sqrt())
}

/// A table of named unary functions.
///
/// Unlike variables, a function name can only be bound once; rebinding
/// requires removing it first.
///
/// # Example
/// ```
/// use shunt::bindings::{FunctionSource, FunctionTable};
///
/// let mut funcs = FunctionTable::with_builtins();
/// assert!(funcs.contains("sqrt"));
///
/// funcs.add("double", |x| Ok(2.0 * x)).unwrap();
/// assert_eq!(funcs.get("double").unwrap()(4.0), Ok(8.0));
/// assert!(funcs.add("double", |x| Ok(x)).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FunctionTable {
    functions: BTreeMap<String, UnaryFunction>,
}

impl FunctionTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding `sin`, `cos`, `tg`, `ln` and `sqrt`.
    #[must_use]
    pub fn with_builtins() -> Self {
        Self { functions: BUILTIN_TABLE.iter()
                                       .map(|(name, func)| ((*name).to_string(), *func))
                                       .collect(), }
    }

    /// Binds `name` to `func`.
    ///
    /// # Errors
    /// - `BindingError::InvalidName` if `name` is not an identifier.
    /// - `BindingError::FunctionAlreadyDefined` if `name` is already bound.
    pub fn add(&mut self, name: &str, func: UnaryFunction) -> Result<(), BindingError> {
        if !is_valid_identifier(name) {
            return Err(BindingError::InvalidName { name: name.to_string() });
        }
        if self.functions.contains_key(name) {
            return Err(BindingError::FunctionAlreadyDefined { name: name.to_string() });
        }
        self.functions.insert(name.to_string(), func);
        Ok(())
    }

    /// Unbinds `name`.
    ///
    /// # Errors
    /// `BindingError::UnknownFunction` if `name` is not bound.
    pub fn remove(&mut self, name: &str) -> Result<(), BindingError> {
        self.functions
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| BindingError::UnknownFunction { name: name.to_string() })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Bound names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    /// One line per function name.
    #[must_use]
    pub fn info(&self) -> String {
        if self.functions.is_empty() {
            return "No functions added.\n".to_string();
        }
        self.names().fold(String::new(), |mut out, name| {
                        let _ = writeln!(out, "{name}(x)");
                        out
                    })
    }
}

impl FunctionSource for FunctionTable {
    fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    fn get(&self, name: &str) -> Option<UnaryFunction> {
        self.functions.get(name).copied()
    }
}
