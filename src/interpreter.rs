/// The evaluator module replays postfix sequences and computes results.
///
/// The evaluator walks a postfix token sequence with a value stack, resolving
/// variables and functions against the bindings supplied for that call. It
/// is the only phase that runs on every calculation.
///
/// # Responsibilities
/// - Evaluates numbers, variables, functions, unary and binary operators.
/// - Reports runtime errors such as division by zero or vanished bindings.
/// - Checks that a sequence leaves exactly one value behind.
pub mod evaluator;
/// The expression module ties the phases together.
///
/// An [`expression::Expression`] is built once from source text and bindings
/// and then calculated as often as needed.
///
/// # Responsibilities
/// - Runs lexing, classification and conversion at construction time.
/// - Owns the source text and the derived token sequences.
/// - Renders the expression in infix, postfix and substituted form.
pub mod expression;
/// The lexer module tokenizes expressions for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens for
/// numbers, identifiers, brackets, separators and operators, each tagged with
/// its source offset.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source offsets.
/// - Reports characters that start no lexeme.
pub mod lexer;
/// The parser module validates tokens and converts them to postfix order.
///
/// The parser resolves the context-dependent role of each token, checks it
/// against the category transition table, and runs the shunting-yard
/// algorithm.
///
/// # Responsibilities
/// - Decides between variables and functions, unary and binary minus, and
///   opening and closing `|`.
/// - Validates grammar, reporting errors with a caret at the offending token.
/// - Applies operator precedence, associativity and bracket matching.
pub mod parser;
