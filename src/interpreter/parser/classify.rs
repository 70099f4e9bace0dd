use crate::{
    bindings::{FunctionSource, VariableSource},
    error::{ParseError, SourcePointer, SyntaxReason},
    interpreter::parser::{core::ParseResult, transition::can_follow},
    token::{Category, Token},
};

/// Gives a lexed token its final category and checks that it may follow the
/// previous one.
///
/// - Identifiers become `Function` when a function of that name is bound,
///   otherwise `Variable` when a variable is bound.
/// - `|` opens an absolute value in prefix position and closes one otherwise.
/// - `-` negates in prefix position and subtracts otherwise.
/// - Every other operator character is binary.
///
/// Prefix position means the previous category is `Start`, an opening
/// bracket, a separator or another operator.
///
/// # Parameters
/// - `token`: The token as produced by the lexer.
/// - `previous`: Final category of the token before it, or `Start`.
/// - `source`: The full expression, for diagnostics.
///
/// # Errors
/// - `UnknownIdentifier` if an identifier is bound in neither table.
/// - `Syntax` if the resolved category cannot follow `previous`, or if a
///   function name is followed by a bracket other than `(`.
///
/// # Example
/// ```
/// use shunt::{
///     bindings::{FunctionTable, VarTable},
///     interpreter::parser::classify::classify,
///     token::{Category, Token},
/// };
///
/// let vars = VarTable::new();
/// let funcs = FunctionTable::new();
/// let minus = Token::new(Category::Operator, "-", 0);
///
/// let resolved = classify(minus.clone(), Category::Start, "-1", &vars, &funcs).unwrap();
/// assert_eq!(resolved.category, Category::UnaryOperator);
///
/// let resolved = classify(minus, Category::Number, "1 - 1", &vars, &funcs).unwrap();
/// assert_eq!(resolved.category, Category::BinaryOperator);
/// ```
pub fn classify<V, F>(token: Token,
                      previous: Category,
                      source: &str,
                      vars: &V,
                      funcs: &F)
                      -> ParseResult<Token>
    where V: VariableSource + ?Sized,
          F: FunctionSource + ?Sized
{
    let category = match token.category {
        Category::Identifier => resolve_identifier(&token, source, vars, funcs)?,
        Category::Operator => resolve_operator(&token, previous),
        other => other,
    };
    let token = token.resolve(category);

    if !can_follow(previous, category) {
        let reason = SyntaxReason::UnexpectedLexeme { lexeme: token.text.clone() };
        return Err(ParseError::Syntax { reason,
                                        at: SourcePointer::new(source, token.offset) });
    }

    if previous == Category::Function && category == Category::LeftBracket && token.text != "(" {
        let reason = SyntaxReason::FunctionCallBracket { lexeme: token.text.clone() };
        return Err(ParseError::Syntax { reason,
                                        at: SourcePointer::new(source, token.offset) });
    }

    Ok(token)
}

fn resolve_identifier<V, F>(token: &Token,
                            source: &str,
                            vars: &V,
                            funcs: &F)
                            -> ParseResult<Category>
    where V: VariableSource + ?Sized,
          F: FunctionSource + ?Sized
{
    if funcs.contains(&token.text) {
        Ok(Category::Function)
    } else if vars.contains(&token.text) {
        Ok(Category::Variable)
    } else {
        Err(ParseError::UnknownIdentifier { name: token.text.clone(),
                                            at:   SourcePointer::new(source, token.offset), })
    }
}

fn resolve_operator(token: &Token, previous: Category) -> Category {
    let prefix = previous.admits_prefix();
    match token.text.as_str() {
        "|" if prefix => Category::LeftBracket,
        "|" => Category::RightBracket,
        "-" if prefix => Category::UnaryOperator,
        _ => Category::BinaryOperator,
    }
}
