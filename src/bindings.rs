/// Built-in functions and the function table.
///
/// Provides [`FunctionTable`], a name-to-function mapping with unique keys,
/// and the default unary functions every calculator starts with.
pub mod functions;
/// The binding interfaces consumed by the engine.
///
/// Expressions never own their bindings. They read them through
/// [`VariableSource`] and [`FunctionSource`] while parsing and again on every
/// calculation, so values may change between calls.
pub mod source;
/// The variable table.
///
/// Provides [`VarTable`], a name-to-number mapping with unique keys, and the
/// default constants.
pub mod variables;

pub use functions::FunctionTable;
pub use source::{FunctionSource, UnaryFunction, VariableSource};
pub use variables::VarTable;
