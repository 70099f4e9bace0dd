/// Token classification and syntax validation.
///
/// Resolves identifiers to variables or functions and operators to their
/// unary, binary or bracket role, then checks each token against the one
/// before it.
pub mod classify;

/// Parsing entry point and shunting-yard conversion.
///
/// Drives lexing and classification and converts the validated infix tokens
/// into postfix order, matching every kind of bracket including `|...|`.
pub mod core;

/// The category transition table.
///
/// A constant boolean matrix answering whether one token category may
/// directly follow another.
pub mod transition;
