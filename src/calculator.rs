use std::fmt::Write;

use log::debug;

use crate::{
    bindings::{FunctionTable, UnaryFunction, VarTable},
    error::Error,
    interpreter::expression::Expression,
};

/// Stores the calculator state.
///
/// A calculator owns a variable table, a function table and an ordered list
/// of expressions built against them. Expressions are addressed by their
/// zero-based position in that list.
///
/// Changing variables never touches the stored expressions. Removing a
/// variable that an expression uses makes later calculations of that
/// expression fail with an unknown-variable error until it is bound again.
///
/// ## Usage
///
/// ```
/// use shunt::calculator::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.add_variable("r", 2.0).unwrap();
/// let area = calc.add_expression("pi * r ^ 2").unwrap();
///
/// let small = calc.calculate(area).unwrap();
/// calc.add_variable("r", 4.0).unwrap();
/// assert!((calc.calculate(area).unwrap() - 4.0 * small).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    variables:   VarTable,
    functions:   FunctionTable,
    expressions: Vec<Expression>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator with the built-in constants and functions and no
    /// expressions.
    #[must_use]
    pub fn new() -> Self {
        Self::with_bindings(VarTable::with_constants(), FunctionTable::with_builtins())
    }

    /// Creates a calculator around existing binding tables.
    #[must_use]
    pub const fn with_bindings(variables: VarTable, functions: FunctionTable) -> Self {
        Self { variables,
               functions,
               expressions: Vec::new() }
    }

    #[must_use]
    pub const fn variables(&self) -> &VarTable {
        &self.variables
    }

    #[must_use]
    pub const fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    /// Binds or rebinds a variable.
    pub fn add_variable(&mut self, name: &str, value: f64) -> Result<(), Error> {
        self.variables.add(name, value)?;
        debug!("variable {name} = {value}");
        Ok(())
    }

    /// Unbinds a variable and returns its last value.
    pub fn remove_variable(&mut self, name: &str) -> Result<f64, Error> {
        let value = self.variables.remove(name)?;
        debug!("variable {name} removed");
        Ok(value)
    }

    /// Binds a new function.
    pub fn add_function(&mut self, name: &str, func: UnaryFunction) -> Result<(), Error> {
        self.functions.add(name, func)?;
        debug!("function {name} added");
        Ok(())
    }

    /// Parses `input` against the current bindings and stores it.
    ///
    /// # Returns
    /// The index of the new expression.
    pub fn add_expression(&mut self, input: &str) -> Result<usize, Error> {
        let expression = Expression::new(input, &self.variables, &self.functions)?;
        self.expressions.push(expression);
        let index = self.expressions.len() - 1;
        debug!("expression {index} added: {input}");
        Ok(index)
    }

    /// Removes and returns the expression at `index`; later expressions move
    /// down by one.
    pub fn remove_expression(&mut self, index: usize) -> Result<Expression, Error> {
        self.check_index(index)?;
        let expression = self.expressions.remove(index);
        debug!("expression {index} removed: {}", expression.source());
        Ok(expression)
    }

    #[must_use]
    pub fn expression(&self, index: usize) -> Option<&Expression> {
        self.expressions.get(index)
    }

    #[must_use]
    pub fn expressions(&self) -> &[Expression] {
        &self.expressions
    }

    /// Calculates the expression at `index` with the current bindings.
    pub fn calculate(&self, index: usize) -> Result<f64, Error> {
        self.check_index(index)?;
        Ok(self.expressions[index].calculate(&self.variables, &self.functions)?)
    }

    /// Calculates every stored expression in order.
    #[must_use]
    pub fn calculate_all(&self) -> Vec<Result<f64, Error>> {
        (0..self.expressions.len()).map(|index| self.calculate(index)).collect()
    }

    /// Variables, functions and expressions, in that order.
    #[must_use]
    pub fn info(&self) -> String {
        format!("{}\n{}\n{}",
                self.vars_info(),
                self.functions_info(),
                self.expressions_info())
    }

    #[must_use]
    pub fn vars_info(&self) -> String {
        format!("=== VARIABLES ===\n{}", self.variables.info())
    }

    #[must_use]
    pub fn functions_info(&self) -> String {
        format!("=== FUNCTIONS ===\n{}", self.functions.info())
    }

    /// Lists the stored expressions, numbered from 1.
    #[must_use]
    pub fn expressions_info(&self) -> String {
        let mut out = String::from("=== EXPRESSIONS ===\n");
        if self.expressions.is_empty() {
            out.push_str("No expressions added.\n");
            return out;
        }
        for (i, expression) in self.expressions.iter().enumerate() {
            let _ = writeln!(out, "{}. {expression}", i + 1);
        }
        out
    }

    fn check_index(&self, index: usize) -> Result<(), Error> {
        if index >= self.expressions.len() {
            return Err(Error::ExpressionIndexOutOfRange { index,
                                                          len: self.expressions.len() });
        }
        Ok(())
    }
}
