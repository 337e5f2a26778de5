use std::f64::consts::{FRAC_PI_4, PI};

use shunt::{Arity, Environment, Error, EvalError, Function, Value, evaluate};

fn builtins() -> Environment {
    Environment::new().with_builtins()
}

fn eval_in(src: &str, env: &Environment) -> Value {
    evaluate(src, env).unwrap_or_else(|e| panic!("Expression {src:?} failed: {e}"))
}

fn eval_error(src: &str, env: &Environment) -> EvalError {
    match evaluate(src, env) {
        Err(Error::Eval(e)) => e,
        other => panic!("Expression {src:?} gave {other:?}, expected an evaluation error"),
    }
}

fn assert_close(src: &str, env: &Environment, expected: f64) {
    let Value::Scalar(actual) = eval_in(src, env) else {
        panic!("Expression {src:?} did not produce a scalar");
    };
    assert!((actual - expected).abs() < 1e-12,
            "{src:?} evaluated to {actual}, expected {expected}");
}

#[test]
fn builtin_calls() {
    let env = builtins().with_variable("x", 2.0)
                        .with_variable("y", 8.0)
                        .with_variable("pi", PI);

    assert_eq!(eval_in("sqrt(x*y) = sqrt(x)*sqrt(y)", &env), Value::Scalar(1.0));
    assert_eq!(eval_in("4 * atan(1) = pi", &env), Value::Scalar(1.0));
    assert_close("atan2(exp(0), sqrt(1))", &env, FRAC_PI_4);
    assert_close("abs(-3) + ln(exp(2))", &env, 5.0);
}

#[test]
fn calls_nest_and_take_expressions() {
    let env = builtins().with_variable("x", 3.0);

    assert_eq!(eval_in("sqrt(sqrt(16)) * 2", &env), Value::Scalar(4.0));
    assert_eq!(eval_in("max(1, x^2, -(x + 20))", &env), Value::Scalar(9.0));
    assert_eq!(eval_in("-min(x, 2)^2", &env), Value::Scalar(-4.0));
    assert_eq!(eval_in("cos(0) + sin(0) * tan(0)", &env), Value::Scalar(1.0));
}

#[test]
fn custom_three_argument_function() {
    let f = Function::scalar(Arity::Exact(3), |a| a[0] * a[1] + a[1] * a[2] + a[2] * a[0]);
    let env = Environment::new().with_function("f", f)
                                .with_variable("x", 1.0)
                                .with_variable("y", 2.0)
                                .with_variable("z", 3.0);

    assert_eq!(eval_in("f(x, y, z)", &env), Value::Scalar(11.0));
    assert_eq!(eval_in("f(x, y, z) = f(z, x, y)", &env), Value::Scalar(1.0));
    assert_eq!(eval_in("f(1 + 1, (2), z * 0)", &env), Value::Scalar(4.0));
}

#[test]
fn zero_argument_functions() {
    let env = Environment::new().with_function("pi", Function::scalar(Arity::Exact(0), |_| PI));

    assert_eq!(eval_in("2 * pi()", &env), Value::Scalar(2.0 * PI));
    assert!(matches!(eval_error("pi(1)", &env), EvalError::ArityMismatch { found: 1, .. }));
}

#[test]
fn helper_constructors() {
    let env = Environment::new().with_function("half", Function::unary(|x| x / 2.0))
                                .with_function("hyp", Function::binary(f64::hypot));

    assert_close("hyp(3, 4) + half(2)", &env, 6.0);
    assert_eq!(Function::unary(f64::abs).arity(), Arity::Exact(1));
}

#[test]
fn arity_errors() {
    let env = builtins();

    assert_eq!(eval_error("atan2(1)", &env),
               EvalError::ArityMismatch { name:     "atan2".to_string(),
                                          expected: "2".to_string(),
                                          found:    1,
                                          offset:   0, });
    assert!(matches!(eval_error("1 + sqrt(1, 2)", &env),
                     EvalError::ArityMismatch { found: 2, offset: 4, .. }));
    assert!(matches!(eval_error("max()", &env), EvalError::ArityMismatch { found: 0, .. }));
    assert_eq!(eval_error("max()", &env).to_string(),
               "Error at position 0: Function 'max' takes at least 1 argument(s), but 0 were \
                supplied.");
}

#[test]
fn misplaced_commas() {
    let env = builtins();

    assert_eq!(eval_error("1, 2", &env), EvalError::MisplacedComma { offset: 1 });
    assert_eq!(eval_error("(1, 2)", &env), EvalError::MisplacedComma { offset: 2 });
    assert_eq!(eval_error("sqrt((1, 2))", &env), EvalError::MisplacedComma { offset: 7 });
}

#[test]
fn function_names_need_parentheses() {
    let env = builtins().with_variable("x", 1.0);

    assert_eq!(eval_error("sqrt + 1", &env),
               EvalError::MissingCallParen { name:   "sqrt".to_string(),
                                             offset: 4, });
    assert_eq!(eval_error("x(2)", &env),
               EvalError::NotAFunction { name:   "x".to_string(),
                                         offset: 0, });
}

#[test]
fn variables_shadow_functions() {
    let env = builtins().with_variable("sqrt", 9.0);
    assert_eq!(eval_in("sqrt + 1", &env), Value::Scalar(10.0));
}

#[test]
fn vector_literals_and_broadcasting() {
    let env = builtins().with_variable("v", [1.0, 2.0, 3.0]);

    assert_eq!(eval_in("[1, 2, 3]", &env), Value::from([1.0, 2.0, 3.0]));
    assert_eq!(eval_in("[1 + 1, -2, 2^3]", &env), Value::from([2.0, -2.0, 8.0]));
    assert_eq!(eval_in("v * 2", &env), Value::from([2.0, 4.0, 6.0]));
    assert_eq!(eval_in("2 - [1, 2]", &env), Value::from([1.0, 0.0]));
    assert_eq!(eval_in("v + [10, 20, 30]", &env), Value::from([11.0, 22.0, 33.0]));
    assert_eq!(eval_in("-v", &env), Value::from([-1.0, -2.0, -3.0]));
    assert_eq!(eval_in("v = [1, 0, 3]", &env), Value::from([1.0, 0.0, 1.0]));
    assert_eq!(eval_in("sqrt([4, 9])", &env), Value::from([2.0, 3.0]));
    assert_eq!(eval_in("atan2([0, 0], 1)", &env), Value::from([0.0, 0.0]));
    assert_eq!(eval_in("[(1 + 2) * 2]", &env), Value::from([6.0]));
}

#[test]
fn vector_functions() {
    let env = builtins().with_variable("v", [1.0, 2.0, 3.0]);

    assert_eq!(eval_in("len(v)", &env), Value::Scalar(3.0));
    assert_eq!(eval_in("len(7)", &env), Value::Scalar(1.0));
    assert_eq!(eval_in("dot(v, v)", &env), Value::Scalar(14.0));
    assert_eq!(eval_in("max(v, 2)", &env), Value::Scalar(3.0));
    assert_eq!(eval_in("min([4, -1], 0)", &env), Value::Scalar(-1.0));

    assert!(matches!(eval_error("dot(v, [1, 2])", &env),
                     EvalError::InvalidArgument { ref name, .. } if name == "dot"));
}

#[test]
fn vector_errors() {
    let env = builtins().with_variable("v", [1.0, 2.0]);

    assert_eq!(eval_error("[1, 2] + [1, 2, 3]", &env),
               EvalError::ShapeMismatch { operator: "+".to_string(),
                                          left:     2,
                                          right:    3,
                                          offset:   7, });
    assert_eq!(eval_error("[1, [2]]", &env), EvalError::NestedVector { offset: 0 });
    assert_eq!(eval_error("[v]", &env), EvalError::NestedVector { offset: 0 });
    assert_eq!(eval_error("[1, 2)", &env),
               EvalError::MismatchedDelimiter { expected: ']',
                                                found:    ')',
                                                offset:   5, });
    assert_eq!(eval_error("(1]", &env),
               EvalError::MismatchedDelimiter { expected: ')',
                                                found:    ']',
                                                offset:   2, });
    assert_eq!(eval_error("[1, 2", &env), EvalError::UnmatchedBracket { offset: 0 });
    assert_eq!(eval_error("1]", &env), EvalError::UnmatchedBracket { offset: 1 });
}

#[test]
fn native_functions_report_invalid_arguments() {
    let positive = Function::native(Arity::Exact(1), |args| match args[0] {
                       Value::Scalar(x) if x > 0.0 => Ok(Value::Scalar(x.ln())),
                       _ => Err("expected a positive scalar".to_string()),
                   });
    let env = Environment::new().with_function("logp", positive);

    assert_eq!(eval_in("logp(1)", &env), Value::Scalar(0.0));
    assert_eq!(eval_error("2 * logp(-1)", &env),
               EvalError::InvalidArgument { name:    "logp".to_string(),
                                            details: "expected a positive scalar".to_string(),
                                            offset:  4, });
}

#[test]
fn environment_can_be_shared_across_threads() {
    let env = builtins().with_variable("x", 4.0);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|i| {
                                        let env = &env;
                                        s.spawn(move || {
                                            evaluate(&format!("sqrt(x) + {i}"), env).unwrap()
                                        })
                                    })
                                    .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), Value::Scalar(2.0 + i as f64));
        }
    });
}
