use std::{collections::HashMap, fs, thread};

use shunt::{
    bindings::{FunctionTable, UnaryFunction, VarTable},
    calculator::Calculator,
    error::{
        BracketReason, DomainError, Error, ParseError, RuntimeError, SourcePointer, SyntaxReason,
    },
    evaluate,
    interpreter::{evaluator::core::evaluate as replay, expression::Expression},
    token::{Category, Token},
};
use walkdir::WalkDir;

const TOLERANCE: f64 = 1e-9;

fn bindings() -> (VarTable, FunctionTable) {
    let mut vars = VarTable::with_constants();
    vars.add("x", 10.0).unwrap();
    vars.add("y", 20.0).unwrap();
    vars.add("z", -3.0).unwrap();
    (vars, FunctionTable::with_builtins())
}

fn build(src: &str) -> Expression {
    let (vars, funcs) = bindings();
    Expression::new(src, &vars, &funcs).unwrap_or_else(|e| panic!("'{src}' failed to parse:\n{e}"))
}

fn rpn(src: &str) -> String {
    build(src).to_postfix_text()
}

fn parse_error(src: &str) -> ParseError {
    let (vars, funcs) = bindings();
    match Expression::new(src, &vars, &funcs) {
        Ok(expr) => panic!("'{src}' parsed as {} but was expected to fail", expr.to_postfix_text()),
        Err(e) => e,
    }
}

fn assert_close(actual: f64, expected: f64, context: &str) {
    assert!((actual - expected).abs() <= TOLERANCE * expected.abs().max(1.0),
            "{context}: expected {expected}, got {actual}");
}

fn error_kind(e: &Error) -> &'static str {
    match e {
        Error::Parse(ParseError::UnknownSymbol { .. }) => "UnknownSymbol",
        Error::Parse(ParseError::UnknownIdentifier { .. }) => "UnknownIdentifier",
        Error::Parse(ParseError::Syntax { .. }) => "Syntax",
        Error::Parse(ParseError::MismatchedBrackets { .. }) => "MismatchedBrackets",
        Error::Runtime(RuntimeError::DivisionByZero { .. }) => "DivisionByZero",
        Error::Runtime(RuntimeError::Domain { .. }) => "Domain",
        Error::Runtime(RuntimeError::UnknownVariable { .. }) => "UnknownVariable",
        Error::Runtime(RuntimeError::UnknownFunction { .. }) => "UnknownFunction",
        Error::Runtime(_) => "Runtime",
        Error::Binding(_) => "Binding",
        Error::ExpressionIndexOutOfRange { .. } => "ExpressionIndexOutOfRange",
    }
}

#[test]
fn case_files_pass() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (src, expected) =
                line.rsplit_once(" => ")
                    .unwrap_or_else(|| panic!("{path:?}:{}: missing ' => '", i + 1));
            let context = format!("{path:?}:{}: '{src}'", i + 1);
            count += 1;

            let (vars, funcs) = bindings();
            let mut calc = Calculator::with_bindings(vars, funcs);
            let result = calc.add_expression(src).and_then(|index| calc.calculate(index));

            match (expected.strip_prefix("error "), result) {
                (Some(kind), Err(e)) => assert_eq!(error_kind(&e), kind, "{context}:\n{e}"),
                (Some(kind), Ok(value)) => panic!("{context}: expected {kind}, got {value}"),
                (None, Ok(value)) => {
                    let expected: f64 = expected.parse()
                                                .unwrap_or_else(|e| panic!("{context}: {e}"));
                    assert_close(value, expected, &context);
                },
                (None, Err(e)) => panic!("{context}: expected {expected}, got error:\n{e}"),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

#[test]
fn precedence_and_grouping() {
    let (vars, funcs) = bindings();

    let expr = build("x + y * 2");
    assert_eq!(expr.to_postfix_text(), "RPN: [ x y 2 * + ]");
    assert_eq!(expr.calculate(&vars, &funcs).unwrap(), 50.0);

    let expr = build("(x + y) * 2");
    assert_eq!(expr.to_postfix_text(), "RPN: [ x y + 2 * ]");
    assert_eq!(expr.calculate(&vars, &funcs).unwrap(), 60.0);

    assert_eq!(rpn("2 ^ 3 ^ 2"), "RPN: [ 2 3 2 ^ ^ ]");
    assert_eq!(rpn("8 - 4 - 2"), "RPN: [ 8 4 - 2 - ]");
}

#[test]
fn unary_minus() {
    assert_eq!(rpn("-x + 5"), "RPN: [ x u- 5 + ]");
    assert_eq!(rpn("5 * -y"), "RPN: [ 5 y u- * ]");
    assert_eq!(rpn("-2 ^ 2"), "RPN: [ 2 u- 2 ^ ]");
    assert_eq!(rpn("2 - -1"), "RPN: [ 2 1 u- - ]");
}

#[test]
fn absolute_value_pipes() {
    let (vars, funcs) = bindings();

    let expr = build("| 2 - 5 |");
    assert_eq!(expr.to_postfix_text(), "RPN: [ 2 5 - abs ]");
    assert_eq!(expr.calculate(&vars, &funcs).unwrap(), 3.0);

    assert_eq!(rpn("| | x | |"), "RPN: [ x abs abs ]");
    assert_eq!(rpn("sqrt(|z|)"), "RPN: [ z abs sqrt ]");
}

#[test]
fn functions_are_emitted_after_their_argument() {
    assert_eq!(rpn("sqrt(x + 6) * 2"), "RPN: [ x 6 + sqrt 2 * ]");
    assert_eq!(rpn("-sqrt(4)"), "RPN: [ 4 sqrt u- ]");
    assert_eq!(rpn("sin(cos(0))"), "RPN: [ 0 cos sin ]");
}

#[test]
fn binary_operators_match_arithmetic() {
    let (vars, funcs) = bindings();
    let pairs = [(7.0, 2.0), (-3.5, 4.0), (0.0, 9.0), (1e6, 3.0)];

    for (a, b) in pairs {
        for (op, expected) in [("+", a + b), ("-", a - b), ("*", a * b), ("/", a / b)] {
            let src = format!("{a} {op} {b}");
            let expr = Expression::new(&src, &vars, &funcs).unwrap();
            assert_close(expr.calculate(&vars, &funcs).unwrap(), expected, &src);
        }
    }
}

#[test]
fn postfix_text_is_deterministic() {
    let sources = ["x + y * 2", "|z - 1| ^ 2 / (x - 1)", "sin(pi / 2) + -cos(0)"];
    for src in sources {
        assert_eq!(rpn(src), rpn(src));
        assert_eq!(build(src), build(src));
    }
}

#[test]
fn repeated_calculation_reads_current_bindings() {
    let (mut vars, funcs) = bindings();
    let expr = Expression::new("x + y * 2", &vars, &funcs).unwrap();

    let first = expr.calculate(&vars, &funcs).unwrap();
    let second = expr.calculate(&vars, &funcs).unwrap();
    assert_eq!(first, second);

    vars.add("x", 15.0).unwrap();
    assert_eq!(expr.calculate(&vars, &funcs).unwrap(), first + 5.0);
    assert_eq!(expr.to_postfix_text(), "RPN: [ x y 2 * + ]");
}

#[test]
fn division_by_zero_points_at_operator() {
    let err = evaluate("5 / 0").unwrap_err();
    let Error::Runtime(RuntimeError::DivisionByZero { at }) = &err else {
        panic!("expected division by zero, got {err:?}");
    };
    assert_eq!(at.offset, 2);
    assert_eq!(at.to_string(), "5 / 0\n  ^");
}

#[test]
fn unknown_identifier_message() {
    let err = parse_error("2 + unknown");
    assert!(matches!(&err, ParseError::UnknownIdentifier { name, .. } if name == "unknown"));
    assert_eq!(err.to_string(), "Unknown identifier 'unknown'.\n2 + unknown\n    ^");
}

#[test]
fn unknown_symbol_message() {
    let err = parse_error("2 $ 3");
    assert_eq!(err, ParseError::UnknownSymbol { symbol: '$',
                                                at:     SourcePointer::new("2 $ 3", 2), });
    assert_eq!(err.to_string(), "Unknown symbol '$'.\n2 $ 3\n  ^");
}

#[test]
fn caret_counts_characters() {
    let err = parse_error("2 + é");
    assert!(matches!(err, ParseError::UnknownSymbol { symbol: 'é', .. }));
    assert_eq!(err.pointer().column(), 4);

    let at = SourcePointer::new("é + ü", 5);
    assert_eq!(at.to_string(), "é + ü\n    ^");
}

#[test]
fn mismatched_brackets() {
    let err = parse_error("(x + 5");
    assert_eq!(err,
               ParseError::MismatchedBrackets { reason: BracketReason::MissingClosing { open: '(' },
                                                at:     SourcePointer::new("(x + 5", 0), });

    let err = parse_error("| 5 )");
    assert!(matches!(err,
                     ParseError::MismatchedBrackets { reason:
                                                          BracketReason::Mismatch { open: '|',
                                                                                    close: ')', },
                                                      .. }));
    assert!(err.to_string().contains("expected matching for '|'"));

    let err = parse_error("x + 5)");
    assert!(matches!(err,
                     ParseError::MismatchedBrackets { reason:
                                                          BracketReason::UnexpectedClosing { close:
                                                                                                 ')' },
                                                      .. }));
    assert_eq!(err.pointer().offset, 5);

    let err = parse_error("sqrt(4");
    assert!(matches!(err,
                     ParseError::MismatchedBrackets { reason:
                                                          BracketReason::MissingClosing { .. },
                                                      .. }));
}

#[test]
fn syntax_errors_carry_their_reason() {
    let err = parse_error("2 + * 3");
    assert_eq!(err,
               ParseError::Syntax { reason: SyntaxReason::UnexpectedLexeme { lexeme:
                                                                                 "*".to_string() },
                                    at:     SourcePointer::new("2 + * 3", 4), });

    let err = parse_error("sin{0}");
    assert!(matches!(&err,
                     ParseError::Syntax { reason: SyntaxReason::FunctionCallBracket { lexeme }, .. }
                     if lexeme == "{"));
    assert!(err.to_string().contains("functions must be called using '('"));

    let err = parse_error("x *");
    assert!(matches!(&err, ParseError::Syntax { reason: SyntaxReason::UnexpectedEnd, .. }));
    assert_eq!(err.pointer().offset, 3);

    let err = parse_error("(x, y)");
    assert_eq!(err.pointer().offset, 2);
}

#[test]
fn empty_input_is_rejected() {
    for src in ["", "   "] {
        let err = parse_error(src);
        assert!(matches!(err, ParseError::Syntax { reason: SyntaxReason::UnexpectedEnd, .. }));
    }
}

#[test]
fn unbound_names_fail_at_calculation() {
    let (mut vars, mut funcs) = bindings();
    let expr = Expression::new("x + sqrt(y)", &vars, &funcs).unwrap();

    vars.remove("x").unwrap();
    let err = expr.calculate(&vars, &funcs).unwrap_err();
    assert!(matches!(&err, RuntimeError::UnknownVariable { name, .. } if name == "x"));
    assert_eq!(err.to_string(), "Unknown variable 'x'.\nx + sqrt(y)\n^");

    vars.add("x", 1.0).unwrap();
    funcs.remove("sqrt").unwrap();
    let err = expr.calculate(&vars, &funcs).unwrap_err();
    assert!(matches!(&err, RuntimeError::UnknownFunction { name, .. } if name == "sqrt"));
    assert_eq!(err.pointer().map(|at| at.offset), Some(4));
}

#[test]
fn domain_errors_propagate() {
    let err = evaluate("ln(0 - 1)").unwrap_err();
    assert!(matches!(&err,
                     Error::Runtime(RuntimeError::Domain { function, .. }) if function == "ln"));
    assert!(err.to_string().contains("logarithm of a non-positive number"));
}

#[test]
fn malformed_postfix_is_reported() {
    let vars = VarTable::new();
    let funcs = FunctionTable::with_builtins();
    let number = |text: &str, offset| Token::new(Category::Number, text, offset);

    let err = replay(&[], "", &vars, &funcs).unwrap_err();
    assert_eq!(err, RuntimeError::EmptyResult);

    let err = replay(&[number("1", 0), number("2", 2)], "1 2", &vars, &funcs).unwrap_err();
    assert_eq!(err, RuntimeError::ExtraOperands { count: 2 });

    let plus = Token::new(Category::BinaryOperator, "+", 2);
    let err = replay(&[number("1", 0), plus], "1 +", &vars, &funcs).unwrap_err();
    assert!(matches!(err, RuntimeError::MissingOperand { .. }));

    let sin = Token::new(Category::Function, "sin", 0);
    let err = replay(&[sin], "sin", &vars, &funcs).unwrap_err();
    assert!(matches!(&err, RuntimeError::MissingOperand { operator, .. } if operator == "sin"));

    let modulo = Token::new(Category::BinaryOperator, "%", 2);
    let err = replay(&[number("1", 0), number("2", 4), modulo], "1 % 2", &vars, &funcs)
                  .unwrap_err();
    assert!(matches!(&err, RuntimeError::UnknownOperator { operator, .. } if operator == "%"));

    let bracket = Token::new(Category::LeftBracket, "(", 0);
    let err = replay(&[bracket], "(", &vars, &funcs).unwrap_err();
    assert!(matches!(err, RuntimeError::UnexpectedToken { .. }));
}

#[test]
fn infix_and_substituted_rendering() {
    let (mut vars, _) = bindings();

    let expr = build("(x+y)*2");
    assert_eq!(expr.to_infix_text(), "( x + y ) * 2");
    assert_eq!(expr.to_string(), "( x + y ) * 2");
    assert_eq!(expr.to_substituted_text(&vars), "( 10 + 20 ) * 2");

    vars.remove("y").unwrap();
    assert_eq!(expr.to_substituted_text(&vars), "( 10 + y ) * 2");

    let expr = build("|z|*-x");
    assert_eq!(expr.to_infix_text(), "| z | * - x");
    assert_eq!(expr.infix()[0].category, Category::LeftBracket);
    assert_eq!(expr.infix()[2].category, Category::RightBracket);
    assert_eq!(expr.infix()[4].category, Category::UnaryOperator);
}

#[test]
fn caller_supplied_maps_work_as_bindings() {
    fn half(x: f64) -> Result<f64, DomainError> {
        Ok(x / 2.0)
    }

    let vars: HashMap<String, f64> = HashMap::from([("rate".to_string(), 0.5)]);
    let funcs: HashMap<String, UnaryFunction> =
        HashMap::from([("half".to_string(), half as UnaryFunction)]);

    let expr = Expression::new("half(rate * 8)", &vars, &funcs).unwrap();
    assert_eq!(expr.calculate(&vars, &funcs).unwrap(), 2.0);
}

#[test]
fn expressions_can_be_shared_between_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Expression>();

    let (vars, funcs) = bindings();
    let expr = Expression::new("x * y + |z|", &vars, &funcs).unwrap();

    thread::scope(|s| {
        let handles: Vec<_> = (0_u8..4).map(|i| {
                                           let expr = &expr;
                                           let handle = s.spawn(move || {
                                                             let mut vars = VarTable::new();
                                                             vars.add("x", f64::from(i)).unwrap();
                                                             vars.add("y", 2.0).unwrap();
                                                             vars.add("z", -1.0).unwrap();
                                                             expr.calculate(&vars,
                                                                            &FunctionTable::new())
                                                                 .unwrap()
                                                         });
                                           (i, handle)
                                       })
                                       .collect();

        for (i, handle) in handles {
            assert_eq!(handle.join().unwrap(), f64::from(i) * 2.0 + 1.0);
        }
    });
}
