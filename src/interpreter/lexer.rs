use logos::Logos;

use crate::{
    error::{ParseError, SourcePointer},
    token::{Category, Token},
};

/// Raw lexemes recognised in an expression.
///
/// Operators and identifiers are matched by shape only; whether `-` negates or
/// subtracts, or whether `x` names a variable or a function, is decided later
/// by the classifier.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\f]+")]
pub enum Lexeme {
    /// Digit runs with at most one decimal point, such as `42`, `3.14` or `2.`.
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,
    /// Names such as `x`, `sin` or `_rate2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `(`, `[` and `{`
    #[token("(")]
    #[token("[")]
    #[token("{")]
    LeftBracket,
    /// `)`, `]` and `}`
    #[token(")")]
    #[token("]")]
    #[token("}")]
    RightBracket,
    /// `,`
    #[token(",")]
    Separator,
    /// `+ - * / ^ |`
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("^")]
    #[token("|")]
    Operator,
}

impl From<Lexeme> for Category {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Number => Self::Number,
            Lexeme::Identifier => Self::Identifier,
            Lexeme::LeftBracket => Self::LeftBracket,
            Lexeme::RightBracket => Self::RightBracket,
            Lexeme::Separator => Self::Separator,
            Lexeme::Operator => Self::Operator,
        }
    }
}

/// Splits an expression into its infix token sequence.
///
/// Every token records the byte offset of its first character. Identifiers
/// and operators come out with the provisional `Identifier` and `Operator`
/// categories.
///
/// # Errors
/// Returns `ParseError::UnknownSymbol` pointing at the first character that
/// does not start a lexeme.
///
/// # Example
/// ```
/// use shunt::{interpreter::lexer::tokenize, token::Category};
///
/// let tokens = tokenize("2 * x").unwrap();
/// let categories: Vec<_> = tokens.iter().map(|t| t.category).collect();
/// assert_eq!(categories, [Category::Number, Category::Operator, Category::Identifier]);
/// assert_eq!(tokens[2].offset, 4);
///
/// assert!(tokenize("2 # 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let span = lexer.span();
        match lexeme {
            Ok(lexeme) => tokens.push(Token::new(lexeme.into(), lexer.slice(), span.start)),
            Err(()) => {
                let symbol = source[span.start..].chars().next().unwrap_or_default();
                return Err(ParseError::UnknownSymbol { symbol,
                                                       at: SourcePointer::new(source,
                                                                              span.start) });
            },
        }
    }

    Ok(tokens)
}

/// Returns `true` when `name` lexes as exactly one identifier.
///
/// # Example
/// ```
/// use shunt::interpreter::lexer::is_valid_identifier;
///
/// assert!(is_valid_identifier("x_1"));
/// assert!(is_valid_identifier("_tmp"));
/// assert!(!is_valid_identifier("1x"));
/// assert!(!is_valid_identifier("a b"));
/// assert!(!is_valid_identifier(""));
/// ```
#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    let mut lexer = Lexeme::lexer(name);
    matches!(lexer.next(), Some(Ok(Lexeme::Identifier)))
    && lexer.span() == (0..name.len())
    && lexer.next().is_none()
}
