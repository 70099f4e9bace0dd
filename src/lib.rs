//! # shunt
//!
//! shunt is an arithmetic expression engine written in Rust.
//! It lexes and validates expressions, converts them to postfix form with the
//! shunting-yard algorithm, and evaluates the postfix form against variable
//! and function bindings supplied by the caller.
//!
//! An expression is parsed once and can then be calculated any number of
//! times while the bound values change.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    bindings::{FunctionTable, VarTable},
    error::Error,
    interpreter::expression::Expression,
};

/// Variable and function bindings.
///
/// This module declares the read-only interfaces through which the engine
/// consults bindings, and the table types that implement them.
///
/// # Responsibilities
/// - Defines [`bindings::VariableSource`] and [`bindings::FunctionSource`].
/// - Provides [`bindings::VarTable`] and [`bindings::FunctionTable`] with
///   unique, validated names.
/// - Supplies the default constants and built-in unary functions.
pub mod bindings;
/// A stateful calculator built on the engine.
///
/// Keeps binding tables and a numbered list of expressions, mirroring an
/// add/remove/evaluate workflow.
pub mod calculator;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating expressions and while maintaining binding tables. Errors tied
/// to a position carry the source text and render a caret under it.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator, bindings).
/// - Attaches source positions for context.
/// - Integrates with standard error handling traits.
pub mod error;
/// Orchestrates parsing and evaluation.
///
/// This module ties together lexing, classification, conversion and
/// evaluation, and exposes the [`interpreter::expression::Expression`] type.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser and evaluator.
/// - Provides entry points for building and calculating expressions.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Defines the structure of parsed expressions.
///
/// This module declares the token categories and the `Token` record shared by
/// every phase.
pub mod token;

/// Parses and calculates `source` once with the default bindings.
///
/// The default bindings are the constants `pi` and `e` and the functions
/// `sin`, `cos`, `tg`, `ln` and `sqrt`.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use shunt::evaluate;
///
/// assert_eq!(evaluate("(1 + 2) * 3").unwrap(), 9.0);
/// assert_eq!(evaluate("|2 - 5|").unwrap(), 3.0);
///
/// // 'x' is not bound.
/// assert!(evaluate("x + 1").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<f64, Error> {
    let vars = VarTable::with_constants();
    let funcs = FunctionTable::with_builtins();

    let expression = Expression::new(source, &vars, &funcs)?;
    Ok(expression.calculate(&vars, &funcs)?)
}
