use std::fmt;

use log::debug;

use crate::{
    bindings::{FunctionSource, VariableSource},
    interpreter::{
        evaluator::core::{EvalResult, evaluate},
        parser::core::{ParseResult, Parsed, parse},
    },
    token::{Category, Token},
};

/// A parsed arithmetic expression, ready to be calculated any number of times.
///
/// Construction lexes, validates and converts the source once and keeps the
/// resulting postfix sequence. The expression never holds on to the bindings
/// it was built with: every [`Expression::calculate`] call reads the current
/// values, so an expression stays valid while variables change around it.
///
/// # Example
/// ```
/// use shunt::{
///     bindings::{FunctionTable, VarTable},
///     interpreter::expression::Expression,
/// };
///
/// let mut vars = VarTable::new();
/// vars.add("x", 10.0).unwrap();
/// vars.add("y", 20.0).unwrap();
/// let funcs = FunctionTable::with_builtins();
///
/// let expr = Expression::new("x + y * 2", &vars, &funcs).unwrap();
/// assert_eq!(expr.to_postfix_text(), "RPN: [ x y 2 * + ]");
/// assert_eq!(expr.calculate(&vars, &funcs).unwrap(), 50.0);
///
/// vars.add("x", 0.0).unwrap();
/// assert_eq!(expr.calculate(&vars, &funcs).unwrap(), 40.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    source:  String,
    infix:   Vec<Token>,
    postfix: Vec<Token>,
}

impl Expression {
    /// Parses `source` against the given bindings.
    ///
    /// The bindings decide whether each identifier names a variable or a
    /// function; their values are not used.
    ///
    /// # Errors
    /// Any `ParseError`: unknown symbols or identifiers, syntax errors and
    /// mismatched brackets. The message points at the offending position.
    pub fn new<V, F>(source: &str, vars: &V, funcs: &F) -> ParseResult<Self>
        where V: VariableSource + ?Sized,
              F: FunctionSource + ?Sized
    {
        let Parsed { infix, postfix } = parse(source, vars, funcs)?;
        let expression = Self { source: source.to_string(),
                                infix,
                                postfix };
        debug!("parsed '{source}' into {}", expression.to_postfix_text());
        Ok(expression)
    }

    /// Calculates the expression with the current bindings.
    ///
    /// # Errors
    /// Any `RuntimeError`, for example division by zero or a variable that
    /// has been unbound since the expression was built.
    pub fn calculate<V, F>(&self, vars: &V, funcs: &F) -> EvalResult<f64>
        where V: VariableSource + ?Sized,
              F: FunctionSource + ?Sized
    {
        evaluate(&self.postfix, &self.source, vars, funcs)
    }

    /// The text the expression was built from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Validated tokens in source order.
    #[must_use]
    pub fn infix(&self) -> &[Token] {
        &self.infix
    }

    /// Tokens in Reverse Polish order.
    #[must_use]
    pub fn postfix(&self) -> &[Token] {
        &self.postfix
    }

    /// Renders the postfix sequence as `RPN: [ ... ]`, writing negation as
    /// `u-`.
    #[must_use]
    pub fn to_postfix_text(&self) -> String {
        let mut text = String::from("RPN: [ ");
        for token in &self.postfix {
            text.push_str(token.rpn_symbol());
            text.push(' ');
        }
        text.push(']');
        text
    }

    /// Rebuilds the expression from its tokens, separated by single spaces.
    #[must_use]
    pub fn to_infix_text(&self) -> String {
        join(self.infix.iter().map(|token| token.text.clone()))
    }

    /// Like [`Expression::to_infix_text`], with every bound variable replaced
    /// by its current value.
    ///
    /// # Example
    /// ```
    /// use shunt::{
    ///     bindings::{FunctionTable, VarTable},
    ///     interpreter::expression::Expression,
    /// };
    ///
    /// let mut vars = VarTable::new();
    /// vars.add("r", 2.5).unwrap();
    /// vars.add("h", 4.0).unwrap();
    /// let funcs = FunctionTable::new();
    ///
    /// let expr = Expression::new("r*r*h", &vars, &funcs).unwrap();
    /// vars.remove("h").unwrap();
    /// assert_eq!(expr.to_substituted_text(&vars), "2.5 * 2.5 * h");
    /// ```
    #[must_use]
    pub fn to_substituted_text<V>(&self, vars: &V) -> String
        where V: VariableSource + ?Sized
    {
        let render = |token: &Token| match token.category {
            Category::Variable => vars.get(&token.text)
                                      .map_or_else(|| token.text.clone(), |value| value.to_string()),
            _ => token.text.clone(),
        };
        join(self.infix.iter().map(render))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_infix_text())
    }
}

fn join(parts: impl Iterator<Item = String>) -> String {
    parts.collect::<Vec<_>>().join(" ")
}
