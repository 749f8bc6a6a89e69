use std::{error::Error, fs};

use gotolang::{interpreter::console::MemoryConsole, parse_source, run_source};
use walkdir::WalkDir;

fn run_with_input(source: &str, input: &[&str]) -> Result<Vec<String>, Box<dyn Error>> {
    let mut console = MemoryConsole::with_input(input.iter().copied());
    run_source(source, &mut console)?;
    Ok(console.into_output())
}

fn run_output(source: &str) -> Vec<String> {
    run_with_input(source, &[]).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

fn assert_failure(src: &str) {
    if run_with_input(src, &[]).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn demo_programs_run() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "goto"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let mut console = MemoryConsole::with_input(["3", "4"]);
        if let Err(e) = run_source(&source, &mut console) {
            panic!("Demo {path:?} failed:\n{source}\nError: {e}");
        }
    }

    assert!(count > 0, "No demo programs found in demos/");
}

#[test]
fn integer_and_real_literals() {
    assert_eq!(run_output("OUTPUT 42;"), ["42"]);
    assert_eq!(run_output("OUTPUT 3.14;"), ["3.14"]);
    assert_eq!(run_output("OUTPUT 2.0;"), ["2.0"]);
}

#[test]
fn arithmetic_precedence() {
    assert_eq!(run_output("OUTPUT 2 + 3 * 4;"), ["14"]);
    assert_eq!(run_output("OUTPUT (2 + 3) * 4;"), ["20"]);
    assert_eq!(run_output("OUTPUT 7 % 3;"), ["1"]);
    assert_eq!(run_output("OUTPUT 10 - 2 - 3;"), ["5"]);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_eq!(run_output("OUTPUT 2 ^ 3 ^ 2;"), ["512"]);
    assert_eq!(run_output("OUTPUT 2 ^ 10;"), ["1024"]);
}

#[test]
fn unary_operators() {
    assert_eq!(run_output("OUTPUT -3;"), ["-3"]);
    assert_eq!(run_output("OUTPUT +3;"), ["3"]);
    assert_eq!(run_output("OUTPUT -(2 + 3);"), ["-5"]);
    // Unary minus binds tighter than `^`.
    assert_eq!(run_output("OUTPUT -2 ^ 2;"), ["4"]);
}

#[test]
fn division_always_produces_a_real() {
    assert_eq!(run_output("OUTPUT 1 / 2;"), ["0.5"]);
    assert_eq!(run_output("OUTPUT 4 / 2;"), ["2.0"]);
}

#[test]
fn mixed_operands_promote_to_real() {
    assert_eq!(run_output("OUTPUT 1 + 2.5;"), ["3.5"]);
    assert_eq!(run_output("OUTPUT 2 * 1.5;"), ["3.0"]);
}

#[test]
fn assignment_round_trip() {
    assert_eq!(run_output("x = 5; OUTPUT x;"), ["5"]);
    assert_eq!(run_output("x = 1; x = x + 1; OUTPUT x;"), ["2"]);
}

#[test]
fn unbound_variable_is_error() {
    assert_failure("OUTPUT ghost;");
    assert_failure("x = y + 1;");
}

#[test]
fn input_binds_numbers_and_text() {
    let output = run_with_input("INPUT a; INPUT b; INPUT c; OUTPUT a; OUTPUT b; OUTPUT c;",
                                &["3", "2.5", "hello"]).unwrap();
    assert_eq!(output, ["3", "2.5", "hello"]);
}

#[test]
fn input_values_join_arithmetic() {
    let output = run_with_input("INPUT a; OUTPUT a * 2;", &["21"]).unwrap();
    assert_eq!(output, ["42"]);
}

#[test]
fn input_past_end_of_script_is_error() {
    assert!(run_with_input("INPUT a;", &[]).is_err());
}

#[test]
fn goto_skips_forward() {
    assert_eq!(run_output("OUTPUT 1; GOTO 3; OUTPUT 2; OUTPUT 3;"), ["1", "3"]);
}

#[test]
fn goto_target_one_past_the_end_halts_cleanly() {
    assert_eq!(run_output("OUTPUT 1; GOTO 2;"), ["1"]);
}

#[test]
fn negative_goto_target_halts_cleanly() {
    assert_eq!(run_output("OUTPUT 1; GOTO -1; OUTPUT 2;"), ["1"]);
}

#[test]
fn real_goto_target_truncates() {
    assert_eq!(run_output("GOTO 2.9; OUTPUT 1; OUTPUT 2;"), ["2"]);
}

#[test]
fn text_goto_target_is_error() {
    assert_failure("GOTO \"start\";");
    assert_failure("x = \"3\"; GOTO x;");
}

#[test]
fn computed_loop_terminates_at_the_boundary() {
    // 0: x = 0;  1: x = x + 1;  2: OUTPUT x;  3: GOTO <computed>;
    // The target stays at 1 while x < 3 and leaves [0, 4) once x reaches 3.
    let source = "x = 0; x = x + 1; OUTPUT x; GOTO 1 + 100 * (0 ^ (3 - x));";
    assert_eq!(run_output(source), ["1", "2", "3"]);
}

#[test]
fn end_to_end_scenario() {
    assert_eq!(run_output("a = 3; b = 4; OUTPUT a + b * 2; GOTO 4;"), ["11"]);
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("OUTPUT 1 / 0;");
    assert_failure("OUTPUT 1.0 / 0.0;");
    assert_failure("OUTPUT 1 % 0;");
}

#[test]
fn text_in_arithmetic_is_error() {
    assert_failure("OUTPUT \"a\" + 1;");
    assert_failure("OUTPUT \"a\" + \"b\";");
    assert_failure("x = \"a\"; OUTPUT x / 2;");
    assert_failure("OUTPUT -\"a\";");
}

#[test]
fn reserved_operators_parse_but_do_not_evaluate() {
    // The grammar accepts every reserved operator...
    parse_source("OUTPUT 1 < 2;").unwrap();
    parse_source("OUTPUT 1 >= 2 && 3 <= 4;").unwrap();
    parse_source("OUTPUT 1 == 2 || 1 != 2;").unwrap();
    parse_source("OUTPUT !1;").unwrap();

    // ...but evaluating one is a runtime error.
    assert_failure("OUTPUT 1 < 2;");
    assert_failure("OUTPUT 1 && 2;");
    assert_failure("OUTPUT !1;");
}

#[test]
fn integer_overflow_is_error() {
    assert_failure("OUTPUT 9223372036854775807 + 1;");
    assert_failure("OUTPUT 3037000500 * 3037000500;");
    assert_failure("OUTPUT 2 ^ 64;");
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let source = "# leading comment\nx = 1; # trailing comment\n\nOUTPUT x;";
    assert_eq!(run_output(source), ["1"]);
}

#[test]
fn empty_statements_advance_the_counter() {
    assert_eq!(run_output("; ; OUTPUT 1; ;"), ["1"]);
    assert_eq!(run_output(";"), Vec::<String>::new());
}

#[test]
fn empty_program_halts_immediately() {
    assert_eq!(run_output(""), Vec::<String>::new());
}

#[test]
fn text_output_is_unquoted() {
    assert_eq!(run_output("OUTPUT \"hello world\";"), ["hello world"]);
}

#[test]
fn escaped_quotes_stay_verbatim() {
    // The backslash keeps the quote from ending the literal but is itself
    // preserved in the payload.
    assert_eq!(run_output(r#"OUTPUT "say \"hi\"";"#), [r#"say \"hi\""#]);
}

#[test]
fn malformed_statements_are_rejected() {
    assert!(parse_source("x = 1").is_err()); // missing ';'
    assert!(parse_source("x = ;").is_err());
    assert!(parse_source("x + 1;").is_err()); // identifier without '='
    assert!(parse_source("= 5;").is_err());
    assert!(parse_source("INPUT 3;").is_err());
    assert!(parse_source("GOTO ;").is_err());
    assert!(parse_source("OUTPUT (1 + 2;").is_err());
    assert!(parse_source("INT x = 1;").is_err()); // reserved type keyword
}

#[test]
fn illegal_characters_are_rejected() {
    assert!(parse_source("x = 1 $ 2;").is_err());
    assert!(parse_source("x = 1 & 2;").is_err()); // lone '&' is not a token
    assert!(parse_source("x = @;").is_err());
}

#[test]
fn diagnostics_carry_line_numbers() {
    let err = run_with_input("x = 1;\nOUTPUT ghost;", &[]).unwrap_err();
    assert!(err.to_string().contains("line 2"), "got: {err}");

    let err = parse_source("x = 1;\n\ny = $;").unwrap_err();
    assert!(err.to_string().contains("line 3"), "got: {err}");
}
