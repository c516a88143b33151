use stackcalc::shell::{LineOutcome, Shell, ShellConfig};

#[test]
fn exit_keywords_are_case_insensitive() {
    let shell = Shell::default();
    for line in ["exit", "EXIT", "Quit", "  quit  "] {
        assert_eq!(shell.process_line(line), LineOutcome::Exit, "{line:?}");
    }
    assert_ne!(shell.process_line("exit 1"), LineOutcome::Exit);
}

#[test]
fn custom_exit_keywords_replace_defaults() {
    let shell = Shell::new(ShellConfig { exit_keywords: vec!["bye".to_string()],
                                         ..ShellConfig::default() });
    assert!(shell.is_exit_command("BYE"));
    assert!(!shell.is_exit_command("exit"));
}

#[test]
fn results_use_configured_precision() {
    let shell = Shell::default();
    assert_eq!(shell.process_line("(2+3)*4"), LineOutcome::Value("20.00".to_string()));
    assert_eq!(shell.process_line("10/3"), LineOutcome::Value("3.33".to_string()));

    let shell = Shell::new(ShellConfig { precision: 4,
                                         ..ShellConfig::default() });
    assert_eq!(shell.format_result(2.0 / 3.0), "0.6667");
}

#[test]
fn failures_do_not_end_the_session() {
    let shell = Shell::default();
    assert_eq!(shell.process_line("5/0"),
               LineOutcome::Failure("Division by zero at offset 1.".to_string()));
    assert_eq!(shell.process_line("2+2"), LineOutcome::Value("4.00".to_string()));
}

#[test]
fn blank_lines_report_an_empty_expression() {
    let shell = Shell::default();
    let empty = LineOutcome::Failure("Expression is empty.".to_string());
    assert_eq!(shell.process_line(""), empty);
    assert_eq!(shell.process_line(" \t "), empty);
    assert_eq!(shell.process_line("1+1"), LineOutcome::Value("2.00".to_string()));
}

#[test]
fn farewell_is_printable() {
    assert!(!Shell::FAREWELL.is_empty());
    assert_eq!(Shell::FAREWELL.lines().count(), 1);
}

#[test]
fn banner_lists_exit_keywords() {
    assert_eq!(Shell::default().banner(),
               "Command-line calculator (type 'exit' or 'quit' to leave)");
}
