use std::fs::{self};

use stepcalc::{
    calculate,
    error::{CalcError, ErrorKind},
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for block in extract_calc_blocks(&content) {
            for line in block.lines().filter(|l| !l.trim().is_empty()) {
                count += 1;
                check_example(line, path);
            }
        }
    }

    assert!(count > 0, "No stepcalc examples found in book/src");
}

fn check_example(line: &str, path: &std::path::Path) {
    let (expression, expected) =
        line.split_once("=>")
            .unwrap_or_else(|| panic!("Example in {path:?} has no '=>': {line}"));
    let (expression, expected) = (expression.trim(), expected.trim());

    match (calculate(expression), expected.strip_prefix("error(")) {
        (Ok(calc), None) => assert_eq!(calc.formatted_result(),
                                       expected,
                                       "{expression} in {path:?}"),
        (Err(e), Some(kind)) => assert_eq!(kind_name(&e),
                                           kind.trim_end_matches(')'),
                                           "{expression} in {path:?}: {e}"),
        (Ok(calc), Some(_)) => panic!("{expression} in {path:?} should fail but gave {}",
                                      calc.formatted_result()),
        (Err(e), None) => panic!("{expression} in {path:?} failed: {e}"),
    }
}

fn kind_name(err: &CalcError) -> &'static str {
    match err.kind() {
        ErrorKind::Lex => "lex",
        ErrorKind::Syntax => "syntax",
        ErrorKind::Eval => "eval",
        ErrorKind::DivideByZero => "divide-by-zero",
    }
}

fn extract_calc_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```stepcalc") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_result(src: &str, expected: &str) {
    match calculate(src) {
        Ok(calc) => assert_eq!(calc.formatted_result(), expected, "{src}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_kind(src: &str, kind: ErrorKind) {
    match calculate(src) {
        Ok(calc) => panic!("Expression {src:?} succeeded with {} but was expected to fail",
                           calc.formatted_result()),
        Err(e) => assert_eq!(e.kind(), kind, "{src}: {e}"),
    }
}

#[test]
fn precedence_and_associativity() {
    assert_result("2+3*4", "14");
    assert_result("2*3+4", "10");
    assert_result("8-3-2", "3");
    assert_result("16/4/2", "2");
    assert_result("2^3^2", "512");
    assert_result("(2^3)^2", "64");
}

#[test]
fn unary_minus_binds_tighter_than_power() {
    assert_result("-2^2", "4");
    assert_result("-(2^2)", "-4");
    assert_result("2^-2", "0.25");
    assert_result("-3", "-3");
    assert_result("2*-3", "-6");
    assert_result("(-3)", "-3");
}

#[test]
fn unary_plus_is_ignored() {
    assert_result("+7", "7");
    assert_result("3*+2", "6");
    assert_result("(+1)+(+1)", "2");
}

#[test]
fn whitespace_does_not_matter() {
    assert_result("  2 +   3 ", "5");
    assert_result("2\t-\t-1", "3");
    assert_result("2 - - 1", "3");
}

#[test]
fn result_formatting() {
    assert_result("4/2", "2");
    assert_result("1/3", "0.333333333333");
    assert_result("5/2", "2.5");
    assert_result("-1/4", "-0.25");
    assert_result("0.1*3", "0.3");
    assert_result("1/3*3", "1");
    assert_result("-0*1", "0");
}

#[test]
fn parentheses_must_balance() {
    assert_kind("(2+3", ErrorKind::Syntax);
    assert_kind("2+3)", ErrorKind::Syntax);
    assert_kind(")(", ErrorKind::Syntax);
    assert_kind("((1)", ErrorKind::Syntax);
}

#[test]
fn division_by_zero_is_its_own_kind() {
    assert_kind("5/0", ErrorKind::DivideByZero);
    assert_kind("5/(1-1)", ErrorKind::DivideByZero);
    assert_kind("1/0.0000000000001", ErrorKind::DivideByZero);
    assert_result("1/0.00000000001", "100000000000");
}

#[test]
fn lexical_errors() {
    assert_kind("1.2.3", ErrorKind::Lex);
    assert_kind("2 % 3", ErrorKind::Lex);
    assert_kind("x + 1", ErrorKind::Lex);
    assert_kind(".", ErrorKind::Lex);
}

#[test]
fn malformed_expressions_are_eval_errors() {
    assert_kind("", ErrorKind::Eval);
    assert_kind("   ", ErrorKind::Eval);
    assert_kind("()", ErrorKind::Eval);
    assert_kind("1 2", ErrorKind::Eval);
    assert_kind("*2", ErrorKind::Eval);
    assert_kind("--2", ErrorKind::Eval);
    assert_kind("-", ErrorKind::Eval);
}

#[test]
fn powers_outside_the_reals_are_eval_errors() {
    assert_kind("(-8)^0.5", ErrorKind::Eval);
    assert_kind("0^-1", ErrorKind::Eval);
    assert_kind("10^400", ErrorKind::Eval);
    assert_result("(-8)^(1/1)", "-8");
}

#[test]
fn results_never_leave_the_finite_range() {
    let too_long = "9".repeat(320);
    assert_kind(&format!("{too_long}*10"), ErrorKind::Lex);
    assert_kind(&format!("-{too_long}"), ErrorKind::Lex);

    let huge = format!("1{}", "0".repeat(308));
    assert_kind(&format!("{huge}*10"), ErrorKind::Eval);
    assert_kind(&format!("{huge}*{huge}"), ErrorKind::Eval);
    assert_kind(&format!("-{huge}-{huge}*2"), ErrorKind::Eval);
    assert_kind("10^300 * 10^300", ErrorKind::Eval);

    let err = calculate(&format!("{too_long}*10")).unwrap_err();
    assert!(err.to_string().ends_with("is too large."), "{err}");

    let err = calculate("10^300 * 10^300").unwrap_err();
    assert!(err.to_string().contains("out of range"), "{err}");
}

#[test]
fn error_messages_name_the_problem() {
    let err = calculate("2 $ 3").unwrap_err();
    assert_eq!(err.to_string(), "Unknown character '$' at position 2.");

    let err = calculate("1.2.3").unwrap_err();
    assert_eq!(err.to_string(),
               "Invalid number with multiple dots '1.2.3' at position 0.");

    let err = calculate("(1").unwrap_err();
    assert!(err.to_string().starts_with("Mismatched parentheses"));

    let err = calculate("1/0").unwrap_err();
    assert_eq!(err.to_string(), "Division by zero.");

    let err = calculate("1 2").unwrap_err();
    assert!(err.to_string().starts_with("Invalid expression or leftover operands"));
}

#[test]
fn calculations_are_independent() {
    let first = calculate("1+2").unwrap();
    let _ = calculate("1 2 3");
    let _ = calculate("5/0");
    let second = calculate("1+2").unwrap();

    assert_eq!(first, second);
}
