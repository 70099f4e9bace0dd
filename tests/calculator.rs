use shunt::{
    bindings::{FunctionSource, VariableSource, functions::BUILTIN_FUNCTIONS},
    calculator::Calculator,
    error::{BindingError, DomainError, Error, ParseError, RuntimeError},
};

fn cube(x: f64) -> Result<f64, DomainError> {
    Ok(x * x * x)
}

fn reciprocal(x: f64) -> Result<f64, DomainError> {
    if x == 0.0 {
        return Err(DomainError("reciprocal of zero"));
    }
    Ok(1.0 / x)
}

#[test]
fn starts_with_default_bindings() {
    let calc = Calculator::new();

    assert!(calc.variables().contains("pi"));
    assert!(calc.variables().contains("e"));
    for name in BUILTIN_FUNCTIONS {
        assert!(calc.functions().contains(name), "missing built-in '{name}'");
    }
    assert!(calc.expressions().is_empty());
}

#[test]
fn expressions_are_numbered_in_insertion_order() {
    let mut calc = Calculator::new();
    calc.add_variable("x", 3.0).unwrap();

    assert_eq!(calc.add_expression("x + 1").unwrap(), 0);
    assert_eq!(calc.add_expression("x * 2").unwrap(), 1);
    assert_eq!(calc.add_expression("x ^ 2").unwrap(), 2);

    let results: Vec<_> = calc.calculate_all().into_iter().map(Result::unwrap).collect();
    assert_eq!(results, [4.0, 6.0, 9.0]);

    let removed = calc.remove_expression(1).unwrap();
    assert_eq!(removed.source(), "x * 2");
    assert_eq!(calc.expression(1).map(|e| e.source()), Some("x ^ 2"));
    assert_eq!(calc.calculate(1).unwrap(), 9.0);
}

#[test]
fn rejected_expressions_are_not_stored() {
    let mut calc = Calculator::new();

    let err = calc.add_expression("2 + y").unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::UnknownIdentifier { .. })));
    assert!(calc.expressions().is_empty());
}

#[test]
fn index_out_of_range() {
    let mut calc = Calculator::new();
    calc.add_expression("1 + 1").unwrap();

    assert_eq!(calc.calculate(1).unwrap_err(),
               Error::ExpressionIndexOutOfRange { index: 1, len: 1 });
    assert!(matches!(calc.remove_expression(5),
                     Err(Error::ExpressionIndexOutOfRange { index: 5, len: 1 })));
    assert!(calc.expression(1).is_none());
}

#[test]
fn variables_follow_the_latest_binding() {
    let mut calc = Calculator::new();
    calc.add_variable("x", 10.0).unwrap();
    calc.add_variable("y", 20.0).unwrap();
    let index = calc.add_expression("x + y * 2").unwrap();

    assert_eq!(calc.calculate(index).unwrap(), 50.0);
    calc.add_variable("x", 0.0).unwrap();
    assert_eq!(calc.calculate(index).unwrap(), 40.0);

    assert_eq!(calc.remove_variable("y").unwrap(), 20.0);
    assert!(matches!(calc.calculate(index),
                     Err(Error::Runtime(RuntimeError::UnknownVariable { .. }))));

    calc.add_variable("y", 1.0).unwrap();
    assert_eq!(calc.calculate(index).unwrap(), 2.0);
}

#[test]
fn binding_errors() {
    let mut calc = Calculator::new();

    assert_eq!(calc.add_variable("2x", 1.0).unwrap_err(),
               Error::Binding(BindingError::InvalidName { name: "2x".to_string() }));
    assert_eq!(calc.add_variable("a b", 1.0).unwrap_err().to_string(),
               "'a b' is not a valid identifier.");
    assert_eq!(calc.remove_variable("missing").unwrap_err(),
               Error::Binding(BindingError::UnknownVariable { name: "missing".to_string() }));
    assert_eq!(calc.add_function("sqrt", cube).unwrap_err().to_string(),
               "Function 'sqrt' is already defined.");
    assert!(matches!(calc.add_function("", cube),
                     Err(Error::Binding(BindingError::InvalidName { .. }))));
}

#[test]
fn custom_functions() {
    let mut calc = Calculator::new();
    calc.add_function("cube", cube).unwrap();
    calc.add_function("inv", reciprocal).unwrap();

    let index = calc.add_expression("cube(2) + inv(4)").unwrap();
    assert_eq!(calc.calculate(index).unwrap(), 8.25);

    let index = calc.add_expression("inv(2 - 2)").unwrap();
    let err = calc.calculate(index).unwrap_err();
    assert!(matches!(&err,
                     Error::Runtime(RuntimeError::Domain { function, .. }) if function == "inv"));
    assert_eq!(err.to_string(), "Function 'inv' failed: reciprocal of zero.\ninv(2 - 2)\n^");
}

#[test]
fn info_listings() {
    let mut calc = Calculator::with_bindings(Default::default(), Default::default());

    assert_eq!(calc.vars_info(), "=== VARIABLES ===\nNo variables added.\n");
    assert_eq!(calc.functions_info(), "=== FUNCTIONS ===\nNo functions added.\n");
    assert_eq!(calc.expressions_info(), "=== EXPRESSIONS ===\nNo expressions added.\n");

    calc.add_variable("y", 2.5).unwrap();
    calc.add_variable("x", 1.0).unwrap();
    calc.add_function("cube", cube).unwrap();
    calc.add_expression("x+y").unwrap();
    calc.add_expression("cube(|x - y|)").unwrap();

    assert_eq!(calc.vars_info(), "=== VARIABLES ===\nx = 1\ny = 2.5\n");
    assert_eq!(calc.functions_info(), "=== FUNCTIONS ===\ncube(x)\n");
    assert_eq!(calc.expressions_info(),
               "=== EXPRESSIONS ===\n1. x + y\n2. cube ( | x - y | )\n");
    assert_eq!(calc.info(),
               format!("{}\n{}\n{}",
                       calc.vars_info(),
                       calc.functions_info(),
                       calc.expressions_info()));
}

#[test]
fn builtin_functions_are_listed_in_name_order() {
    let calc = Calculator::new();
    let names: Vec<_> = calc.functions().names().collect();
    let mut sorted = BUILTIN_FUNCTIONS.to_vec();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}
