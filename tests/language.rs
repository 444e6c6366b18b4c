use std::fs;

use monkey::{interpreter::evaluator::core::Evaluator, parse};
use walkdir::WalkDir;

/// Parses and evaluates a script, returning the inspected result.
fn run(src: &str) -> Result<String, String> {
    let (program, errors) = parse(src);
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return Err(messages.join("\n"));
    }
    Ok(Evaluator::new().eval(&program).inspect())
}

#[test]
fn scripts_produce_expected_values() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "monkey"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("expected");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        count += 1;
        match run(&source) {
            Ok(actual) => assert_eq!(actual, expected.trim_end(), "script {path:?}"),
            Err(e) => panic!("Script {path:?} failed to parse:\n{e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn assert_result(src: &str, expected: &str) {
    match run(src) {
        Ok(actual) => assert_eq!(actual, expected, "result of {src:?}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_rejected(src: &str) {
    if let Ok(v) = run(src) {
        panic!("Script evaluated to {v} but was expected to be rejected")
    }
}

#[test]
fn identifiers_evaluate_to_null() {
    assert_result("let x = 1 + 2;\nx * 3", "null");
    assert_result("let x = 1 + 2;\n(1 + 2) * 3", "9");
    assert_result("8 - 5", "3");
    assert_result("10 / 2", "5");
}

#[test]
fn multi_line_programs() {
    assert_result(r"
        let a = 1;
        if (1 < 2) {
            1 + 2;
        } else {
            1 - 2;
        }
    ",
                  "3");
}

#[test]
fn runtime_errors_are_values() {
    assert_result("1 / 0", "ERROR: Error on line 1: Division by zero.");
    assert_result("\n\n9223372036854775807 + 1",
                  "ERROR: Error on line 3: Integer overflow while trying to compute result.");
}

#[test]
fn syntax_errors_are_rejected() {
    assert_rejected("let x 5;");
    assert_rejected("if (x { 1 }");
    assert_rejected("fn(1) { }");
    assert_rejected("5 +");
}
