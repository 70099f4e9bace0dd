use std::fmt;

/// Number of token categories, including the virtual `Start` and `End`.
pub const CATEGORY_COUNT: usize = 12;

/// The closed set of token categories.
///
/// `Identifier` and `Operator` are provisional: the lexer emits them and the
/// classifier replaces them with a final category before the token reaches
/// the converter. `Start` and `End` never appear on a real token; they stand
/// for the positions before the first and after the last token when the
/// transition table is consulted.
///
/// The discriminants index the transition table, so the variant order is
/// significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Virtual category preceding the first token.
    Start = 0,
    /// Virtual category following the last token.
    End,
    /// A numeric literal such as `42` or `3.5`.
    Number,
    /// `(`, `[`, `{`, or an opening `|`.
    LeftBracket,
    /// `)`, `]`, `}`, or a closing `|`.
    RightBracket,
    /// `,`
    Separator,
    /// `+`, `-`, `*`, `/` or `^` between two operands.
    BinaryOperator,
    /// A prefix `-`, or the synthetic `abs` emitted for `|...|`.
    UnaryOperator,
    /// An identifier bound to a number.
    Variable,
    /// An identifier bound to a unary function.
    Function,
    /// An identifier whose binding has not been resolved yet.
    Identifier,
    /// An operator character whose role has not been resolved yet.
    Operator,
}

impl Category {
    /// Position of this category in the transition table.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns `true` for the categories that only the lexer produces.
    #[must_use]
    pub const fn is_provisional(self) -> bool {
        matches!(self, Self::Identifier | Self::Operator)
    }

    /// Returns `true` when an operator following this category is in prefix
    /// position: `-` becomes negation and `|` opens an absolute value.
    #[must_use]
    pub const fn admits_prefix(self) -> bool {
        matches!(self,
                 Self::Start
                 | Self::LeftBracket
                 | Self::Separator
                 | Self::BinaryOperator
                 | Self::UnaryOperator)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start of expression",
            Self::End => "end of expression",
            Self::Number => "number",
            Self::LeftBracket => "opening bracket",
            Self::RightBracket => "closing bracket",
            Self::Separator => "separator",
            Self::BinaryOperator => "binary operator",
            Self::UnaryOperator => "unary operator",
            Self::Variable => "variable",
            Self::Function => "function",
            Self::Identifier => "identifier",
            Self::Operator => "operator",
        };
        f.write_str(name)
    }
}

/// Text of the synthetic unary operator that encodes `|x|` in postfix form.
pub const ABS: &str = "abs";

/// A single lexeme of an expression.
///
/// Tokens are plain values. The only change a token ever sees is the one-time
/// move from a provisional category to its final one, which produces a new
/// token through [`Token::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of lexeme this is.
    pub category: Category,
    /// The literal text, never empty.
    pub text:     String,
    /// Byte offset of the first character in the source expression.
    pub offset:   usize,
}

impl Token {
    #[must_use]
    pub fn new(category: Category, text: impl Into<String>, offset: usize) -> Self {
        Self { category,
               text: text.into(),
               offset }
    }

    /// Consumes a provisional token and returns it with its final category.
    #[must_use]
    pub fn resolve(self, category: Category) -> Self {
        Self { category, ..self }
    }

    /// First character of the lexeme, used for bracket matching.
    #[must_use]
    pub fn first_char(&self) -> char {
        self.text.chars().next().unwrap_or_default()
    }

    /// Text used when rendering a postfix sequence.
    ///
    /// Negation is written `u-` so that it cannot be confused with
    /// subtraction; every other token is rendered as written.
    #[must_use]
    pub fn rpn_symbol(&self) -> &str {
        if self.category == Category::UnaryOperator && self.text == "-" {
            "u-"
        } else {
            &self.text
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
