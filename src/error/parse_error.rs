use std::fmt;

use thiserror::Error;

use crate::error::SourcePointer;

/// Represents all errors that can occur while building an expression.
///
/// Every variant points at the offending position of the source text, and the
/// rendered message always ends with the source line and a caret.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character that does not start any lexeme.
    #[error("Unknown symbol '{symbol}'.\n{at}")]
    UnknownSymbol {
        /// The character encountered.
        symbol: char,
        /// Where it was found.
        at:     SourcePointer,
    },
    /// An identifier that is neither a bound variable nor a bound function.
    #[error("Unknown identifier '{name}'.\n{at}")]
    UnknownIdentifier {
        /// The identifier as written.
        name: String,
        /// Where it starts.
        at:   SourcePointer,
    },
    /// The token sequence breaks the expression grammar.
    #[error("Syntax error: {reason}.\n{at}")]
    Syntax {
        /// What exactly went wrong.
        reason: SyntaxReason,
        /// The offending token, or the end of the expression.
        at:     SourcePointer,
    },
    /// Brackets that do not pair up.
    #[error("Mismatched brackets: {reason}.\n{at}")]
    MismatchedBrackets {
        /// Which bracket characters are involved.
        reason: BracketReason,
        /// The unmatched bracket.
        at:     SourcePointer,
    },
}

impl ParseError {
    /// The position this error points at.
    #[must_use]
    pub const fn pointer(&self) -> &SourcePointer {
        match self {
            Self::UnknownSymbol { at, .. }
            | Self::UnknownIdentifier { at, .. }
            | Self::Syntax { at, .. }
            | Self::MismatchedBrackets { at, .. } => at,
        }
    }
}

/// The specific grammar rule a [`ParseError::Syntax`] violates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxReason {
    /// The lexeme cannot follow the previous one.
    UnexpectedLexeme {
        /// The lexeme as written.
        lexeme: String,
    },
    /// A function name followed by a bracket other than `(`.
    FunctionCallBracket {
        /// The bracket that was used instead.
        lexeme: String,
    },
    /// A `,` with no enclosing bracket.
    SeparatorOutsideBrackets,
    /// The expression stops where an operand or bracket is still required.
    UnexpectedEnd,
}

impl SyntaxReason {
    /// The offending lexeme, if the reason is tied to one.
    #[must_use]
    pub fn lexeme(&self) -> Option<&str> {
        match self {
            Self::UnexpectedLexeme { lexeme } | Self::FunctionCallBracket { lexeme } => {
                Some(lexeme)
            },
            Self::SeparatorOutsideBrackets => Some(","),
            Self::UnexpectedEnd => None,
        }
    }
}

impl fmt::Display for SyntaxReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedLexeme { lexeme } => write!(f, "unexpected lexeme '{lexeme}'"),
            Self::FunctionCallBracket { lexeme } => {
                write!(f, "functions must be called using '(', but found '{lexeme}'")
            },
            Self::SeparatorOutsideBrackets => write!(f, "separator outside of brackets"),
            Self::UnexpectedEnd => write!(f, "unexpected end of expression"),
        }
    }
}

/// How a set of brackets failed to pair up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketReason {
    /// An opening bracket (or a function call) was never closed.
    MissingClosing {
        /// The opening character, `(` for function calls.
        open: char,
    },
    /// A closing bracket with nothing left to close.
    UnexpectedClosing {
        /// The closing character.
        close: char,
    },
    /// A closing bracket of the wrong kind.
    Mismatch {
        /// The innermost open bracket.
        open:  char,
        /// The closing character found instead of its partner.
        close: char,
    },
}

impl fmt::Display for BracketReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingClosing { open } => write!(f, "missing closing bracket for '{open}'"),
            Self::UnexpectedClosing { close } => write!(f, "unexpected closing bracket '{close}'"),
            Self::Mismatch { open, close } => {
                write!(f, "expected matching for '{open}', but found '{close}'")
            },
        }
    }
}
