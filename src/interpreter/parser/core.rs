use log::trace;

use crate::{
    bindings::{FunctionSource, VariableSource},
    error::{BracketReason, ParseError, SourcePointer, SyntaxReason},
    interpreter::{
        lexer::tokenize,
        parser::{classify::classify, transition::can_follow},
    },
    token::{ABS, Category, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The two token sequences derived from a valid expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    /// Tokens in source order, with their final categories.
    pub infix:   Vec<Token>,
    /// The same expression in Reverse Polish order.
    pub postfix: Vec<Token>,
}

/// Parses an expression into its postfix form.
///
/// This is the entry point for parsing. It runs the three construction phases
/// in a single pass over the source: lexing, classification of each token
/// against the previous one, and shunting-yard conversion.
///
/// # Parameters
/// - `source`: The expression text.
/// - `vars`, `funcs`: Bindings that decide whether an identifier is a
///   variable or a function. They are only read.
///
/// # Returns
/// The validated infix sequence and its postfix equivalent.
///
/// # Example
/// ```
/// use shunt::{
///     bindings::{FunctionTable, VarTable},
///     interpreter::parser::core::parse,
/// };
///
/// let mut vars = VarTable::new();
/// vars.add("x", 1.0).unwrap();
///
/// let parsed = parse("x + 2 * 3", &vars, &FunctionTable::new()).unwrap();
/// let rpn: Vec<_> = parsed.postfix.iter().map(|t| t.rpn_symbol()).collect();
/// assert_eq!(rpn, ["x", "2", "3", "*", "+"]);
/// ```
pub fn parse<V, F>(source: &str, vars: &V, funcs: &F) -> ParseResult<Parsed>
    where V: VariableSource + ?Sized,
          F: FunctionSource + ?Sized
{
    let tokens = tokenize(source)?;
    let mut infix = Vec::with_capacity(tokens.len());
    let mut converter = ShuntingYard::new(source, tokens.len());
    let mut previous = Category::Start;

    for token in tokens {
        let token = classify(token, previous, source, vars, funcs)?;
        previous = token.category;
        converter.push(token.clone())?;
        infix.push(token);
    }

    let postfix = converter.finish(previous)?;
    Ok(Parsed { infix, postfix })
}

/// Binding strength of an operator or function token.
///
/// Functions bind tightest, then negation and `abs`, then `^`, then `*` and
/// `/`, then `+` and `-`. Anything else has no precedence.
#[must_use]
pub fn precedence(token: &Token) -> u8 {
    match token.category {
        Category::Function => 5,
        Category::UnaryOperator => 4,
        Category::BinaryOperator => match token.text.as_str() {
            "^" => 3,
            "*" | "/" => 2,
            "+" | "-" => 1,
            _ => 0,
        },
        _ => 0,
    }
}

/// `^` and every unary operator group from the right.
#[must_use]
pub fn is_right_associative(token: &Token) -> bool {
    token.category == Category::UnaryOperator || token.text == "^"
}

/// Returns `true` when `close` is the partner of `open`.
#[must_use]
pub const fn is_matching_pair(open: char, close: char) -> bool {
    matches!((open, close), ('(', ')') | ('[', ']') | ('{', '}') | ('|', '|'))
}

/// Operator-precedence conversion from infix to postfix order.
///
/// Tokens must already carry their final categories.
struct ShuntingYard<'a> {
    source:    &'a str,
    output:    Vec<Token>,
    operators: Vec<Token>,
}

impl<'a> ShuntingYard<'a> {
    fn new(source: &'a str, capacity: usize) -> Self {
        Self { source,
               output: Vec::with_capacity(capacity),
               operators: Vec::with_capacity(capacity) }
    }

    fn push(&mut self, token: Token) -> ParseResult<()> {
        trace!("shunting {} '{}' at {}", token.category, token.text, token.offset);

        match token.category {
            Category::Number | Category::Variable => self.output.push(token),
            Category::LeftBracket | Category::Function => self.operators.push(token),
            Category::Separator => {
                if !self.drain_to_open_bracket() {
                    return Err(self.syntax(SyntaxReason::SeparatorOutsideBrackets, token.offset));
                }
            },
            Category::RightBracket => self.close_bracket(&token)?,
            Category::BinaryOperator | Category::UnaryOperator => self.push_operator(token),
            Category::Start | Category::End | Category::Identifier | Category::Operator => {
                let offset = token.offset;
                return Err(self.syntax(SyntaxReason::UnexpectedLexeme { lexeme: token.text },
                                       offset));
            },
        }

        Ok(())
    }

    /// Moves operators to the output until an opening bracket is on top.
    ///
    /// Returns `false` if the stack ran out without finding one.
    fn drain_to_open_bracket(&mut self) -> bool {
        while let Some(top) = self.operators.pop() {
            if top.category == Category::LeftBracket {
                self.operators.push(top);
                return true;
            }
            self.output.push(top);
        }
        false
    }

    fn close_bracket(&mut self, token: &Token) -> ParseResult<()> {
        let close = token.first_char();

        if !self.drain_to_open_bracket() {
            return Err(self.brackets(BracketReason::UnexpectedClosing { close }, token.offset));
        }
        let Some(open) = self.operators.pop() else {
            return Err(self.brackets(BracketReason::UnexpectedClosing { close }, token.offset));
        };

        let open = open.first_char();
        if !is_matching_pair(open, close) {
            return Err(self.brackets(BracketReason::Mismatch { open, close }, token.offset));
        }

        if close == '|' {
            self.output.push(Token::new(Category::UnaryOperator, ABS, token.offset));
        }

        if self.operators.last().is_some_and(|top| top.category == Category::Function)
           && let Some(function) = self.operators.pop()
        {
            self.output.push(function);
        }

        Ok(())
    }

    fn push_operator(&mut self, token: Token) {
        let priority = precedence(&token);
        let right = is_right_associative(&token);

        while let Some(top) = self.operators.last() {
            if top.category == Category::LeftBracket {
                break;
            }
            let top_priority = precedence(top);
            let yields = if right {
                top_priority > priority
            } else {
                top_priority >= priority
            };
            if !yields {
                break;
            }
            if let Some(top) = self.operators.pop() {
                self.output.push(top);
            }
        }

        self.operators.push(token);
    }

    /// Flushes the operator stack and checks that the expression may end
    /// after `previous`.
    fn finish(mut self, previous: Category) -> ParseResult<Vec<Token>> {
        while let Some(top) = self.operators.pop() {
            match top.category {
                Category::LeftBracket => {
                    let open = top.first_char();
                    return Err(self.brackets(BracketReason::MissingClosing { open }, top.offset));
                },
                Category::Function => {
                    return Err(self.brackets(BracketReason::MissingClosing { open: '(' },
                                             top.offset));
                },
                _ => self.output.push(top),
            }
        }

        if !can_follow(previous, Category::End) {
            return Err(ParseError::Syntax { reason: SyntaxReason::UnexpectedEnd,
                                            at:     SourcePointer::end_of(self.source), });
        }

        Ok(self.output)
    }

    fn syntax(&self, reason: SyntaxReason, offset: usize) -> ParseError {
        ParseError::Syntax { reason,
                             at: SourcePointer::new(self.source, offset) }
    }

    fn brackets(&self, reason: BracketReason, offset: usize) -> ParseError {
        ParseError::MismatchedBrackets { reason,
                                         at: SourcePointer::new(self.source, offset) }
    }
}
