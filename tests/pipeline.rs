use std::fs;

use shunt::{
    Error,
    error::{EvalError, ParseError, TranslationError},
    evaluate_expression, evaluate_rpn, evaluate_with,
    interpreter::registry::Registry,
    parse_to_rpn,
};
use walkdir::WalkDir;

const TOLERANCE: f64 = 1e-9;

fn assert_value(src: &str, expected: f64) {
    match evaluate_expression(src) {
        Ok(value) => assert!((value - expected).abs() <= TOLERANCE,
                             "'{src}' evaluated to {value}, expected {expected}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = evaluate_expression(src) {
        panic!("'{src}' evaluated to {value} but was expected to fail")
    }
}

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for line in content.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            count += 1;
            if let Some(src) = line.strip_prefix("error:") {
                assert_failure(src.trim());
                continue;
            }
            let (src, expected) =
                line.rsplit_once('=')
                    .unwrap_or_else(|| panic!("Malformed case in {path:?}: {line}"));
            let expected: f64 =
                expected.trim()
                        .parse()
                        .unwrap_or_else(|e| panic!("Bad expected value in {path:?}: {line}: {e}"));
            assert_value(src.trim(), expected);
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

#[test]
fn end_to_end_scenarios() {
    assert_eq!(evaluate_expression("2+3"), Ok(5.0));
    assert_eq!(evaluate_expression("2+3*4"), Ok(14.0));
    assert_eq!(evaluate_expression("(2+3)*4"), Ok(20.0));
    assert_eq!(evaluate_expression("((2+3)*4)-5"), Ok(15.0));
    assert_eq!(evaluate_expression("2+3*4-5/6"), Ok(13.166_666_666_666_666));
}

#[test]
fn unbalanced_parentheses_fail_while_sorting() {
    for src in ["(2+3", "2+3)"] {
        assert!(matches!(evaluate_expression(src),
                         Err(Error::Parse(ParseError::UnbalancedParenthesis { .. }))),
                "{src}");
    }
}

#[test]
fn division_by_zero_fails_while_evaluating() {
    assert_eq!(evaluate_expression("5/0"), Err(Error::Eval(EvalError::DivisionByZero)));
    assert_eq!(evaluate_expression("5/(3-3)"), Err(Error::Eval(EvalError::DivisionByZero)));
}

#[test]
fn nested_functions_evaluate_without_underflow() {
    let value = evaluate_expression("sin(cos(45))").unwrap();
    assert!((value - 45f64.cos().sin()).abs() <= TOLERANCE);
}

#[test]
fn missing_operand_underflows() {
    assert!(matches!(evaluate_expression("2*"),
                     Err(Error::Eval(EvalError::StackUnderflow { .. }))));
}

#[test]
fn rpn_helpers_compose_into_evaluation() {
    let rpn = parse_to_rpn("(2+3)*4").unwrap();
    let text: Vec<_> = rpn.iter().map(|t| t.text()).collect();
    assert_eq!(text, ["2", "3", "+", "4", "*"]);
    assert_eq!(evaluate_rpn(&rpn, Registry::shared()), Ok(20.0));
    assert_eq!(evaluate_rpn(&rpn, Registry::shared()), evaluate_expression("(2+3)*4"));
}

#[test]
fn rpn_helpers_report_their_own_stage() {
    assert!(matches!(parse_to_rpn("2+3)"), Err(ParseError::UnbalancedParenthesis { .. })));
    let rpn = parse_to_rpn("nosuch(1)").unwrap();
    assert!(matches!(evaluate_rpn(&rpn, Registry::shared()),
                     Err(Error::Translation(TranslationError::UnsupportedFunction { .. }))));
    assert_eq!(evaluate_rpn(&[], Registry::shared()),
               Err(Error::Eval(EvalError::MalformedExpression { remaining: 0 })));
}

#[test]
fn custom_registry() {
    let registry = Registry::standard().with_function("double", 1, |args| Ok(args[0] * 2.0));
    assert_eq!(evaluate_with("double(2+3)", &registry), Ok(10.0));
    assert!(evaluate_expression("double(1)").is_err());
}

#[test]
fn errors_display_their_location() {
    let message = evaluate_expression("2 + (3").unwrap_err().to_string();
    assert_eq!(message, "Error at position 4: Unbalanced parenthesis '('.");
}

#[test]
fn concurrent_evaluations_share_the_registry() {
    let handles: Vec<_> = (1..=8).map(|n| {
                                     std::thread::spawn(move || {
                                         evaluate_expression(&format!("{n}*{n}+1"))
                                     })
                                 })
                                 .collect();
    for (n, handle) in (1..=8).zip(handles) {
        let expected = f64::from(n * n + 1);
        assert_eq!(handle.join().unwrap(), Ok(expected));
    }
}
