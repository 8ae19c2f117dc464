use stepcalc::repl::{BANNER, FAREWELL, ReplConfig, run_interactive, run_script};

fn interactive(input: &str, config: ReplConfig) -> String {
    let mut out = Vec::new();
    run_interactive(input.as_bytes(), &mut out, config).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn session_prints_the_full_report() {
    let out = interactive("3+4\nquit\n", ReplConfig::default());

    let expected = format!("{BANNER}\n\nEnter expression: Tokens: [3, +, 4]\nPostfix: [3, 4, +]\n\nEvaluation steps:\n   PUSH 3\n   PUSH 4\n   APPLY + to 3 and 4 -> 7\n\nResult: 7\n\nEnter expression: {FAREWELL}\n");
    assert_eq!(out, expected);
}

#[test]
fn errors_do_not_end_the_session() {
    let out = interactive("5/0\n(1\n2*2\n", ReplConfig::default());

    assert!(out.contains("Error: Division by zero.\n"));
    assert!(out.contains("Error: Mismatched parentheses"));
    assert!(out.contains("Result: 4\n"));
}

#[test]
fn sentinels_ignore_case_and_padding() {
    for sentinel in ["quit", "EXIT", "  Quit  ", "eXiT"] {
        let out = interactive(&format!("{sentinel}\n1+1\n"), ReplConfig::default());
        assert!(out.ends_with(&format!("{FAREWELL}\n")), "{sentinel}");
        assert!(!out.contains("Result"), "{sentinel}");
    }
}

#[test]
fn blank_lines_and_end_of_input() {
    let out = interactive("\n   \n", ReplConfig::default());

    assert!(!out.contains("Error"));
    assert!(!out.contains(FAREWELL));
    assert_eq!(out.matches("Enter expression: ").count(), 3);
}

#[test]
fn pipe_mode_prints_results_only() {
    let config = ReplConfig { pipe_mode: true };
    assert_eq!(interactive("1/3\n2^10\n1.2.3\nexit\n9\n", config),
               "0.333333333333\n1024\nError: Invalid number with multiple dots '1.2.3' at position 0.\n");
}

#[test]
fn scripts_run_every_line() {
    let mut out = Vec::new();
    run_script("1+1\n\n2*3\n7/0\n", &mut out, ReplConfig { pipe_mode: true }).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(),
               "2\n6\nError: Division by zero.\n");
}
