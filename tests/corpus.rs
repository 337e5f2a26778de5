use std::{fs, path::Path};

use shunt::{Environment, Value, evaluate};
use walkdir::WalkDir;

/// Environment shared by every case file.
fn corpus_environment() -> Environment {
    Environment::new().with_builtins()
                      .with_variable("x", 3.0)
                      .with_variable("y", 4.0)
                      .with_variable("v", [1.0, 2.0, 3.0])
}

fn approx_eq(actual: &Value, expected: &Value) -> bool {
    let close = |a: f64, b: f64| (a - b).abs() <= 1e-9 * b.abs().max(1.0);

    match (actual, expected) {
        (Value::Scalar(a), Value::Scalar(b)) => close(*a, *b),
        (Value::Vector(a), Value::Vector(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| close(*a, *b))
        },
        _ => false,
    }
}

fn run_case(path: &Path, number: usize, line: &str, env: &Environment) {
    let Some((source, expected)) = line.split_once("=>") else {
        panic!("{path:?}:{number}: missing '=>' in {line:?}");
    };
    let (source, expected) = (source.trim(), expected.trim());
    let result = evaluate(source, env);

    if expected == "error" {
        if let Ok(v) = result {
            panic!("{path:?}:{number}: {source:?} gave {v} but was expected to fail");
        }
        return;
    }

    let expected = evaluate(expected, &Environment::new()).unwrap_or_else(|e| {
                       panic!("{path:?}:{number}: bad expected value {expected:?}: {e}")
                   });
    match result {
        Ok(actual) => assert!(approx_eq(&actual, &expected),
                              "{path:?}:{number}: {source:?} gave {actual}, expected {expected}"),
        Err(e) => panic!("{path:?}:{number}: {source:?} failed:\n{}", e.render(source)),
    }
}

#[test]
fn case_files_evaluate_as_expected() {
    let env = corpus_environment();
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/cases");
    let mut count = 0;

    for entry in
        WalkDir::new(&root).into_iter()
                           .filter_map(Result::ok)
                           .filter(|e| e.path().extension().is_some_and(|ext| ext == "expr"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            count += 1;
            run_case(path, i + 1, line, &env);
        }
    }

    assert!(count > 0, "No cases found in {root:?}");
}
