use polycalc::calculator::Calculator;

/// Runs a whole script and returns (stdout, stderr).
fn run_script(input: &str) -> (String, String) {
    let mut calc = Calculator::new(Vec::new(), Vec::new());
    calc.run(input.as_bytes()).unwrap();
    let (out, diag) = calc.into_parts();
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(diag).unwrap(),
    )
}

#[test]
fn zero_and_queries() {
    let (out, diag) = run_script("ZERO\nIS_ZERO\nIS_COEFF\nDEG\nPRINT\n");
    assert_eq!(out, "1\n1\n-1\n0\n");
    assert_eq!(diag, "");
}

#[test]
fn evaluate_a_parsed_polynomial() {
    let (out, diag) = run_script("(3,0)+(2,1)\nDEG\nAT 5\nPRINT\nIS_COEFF\n");
    assert_eq!(out, "1\n13\n1\n");
    assert_eq!(diag, "");
}

#[test]
fn arithmetic_on_the_stack() {
    let (out, diag) = run_script("1\n2\nADD\nPRINT\nPOP\n1\n5\nSUB\nPRINT\n");
    // SUB is top minus second: 5 - 1
    assert_eq!(out, "3\n4\n");
    assert_eq!(diag, "");
}

#[test]
fn clone_neg_cancel() {
    let (out, diag) = run_script("5\nCLONE\nNEG\nADD\nPRINT\n");
    assert_eq!(out, "0\n");
    assert_eq!(diag, "");
}

#[test]
fn multiplication_expands() {
    let (out, diag) = run_script("(1,0)+(1,1)\nCLONE\nMUL\nPRINT\n");
    assert_eq!(out, "(1,0)+(2,1)+(1,2)\n");
    assert_eq!(diag, "");
}

#[test]
fn is_eq_compares_without_popping() {
    let (out, diag) = run_script("2\n2\nIS_EQ\nADD\nPRINT\n");
    assert_eq!(out, "1\n4\n");
    assert_eq!(diag, "");
}

#[test]
fn degrees_of_a_nested_polynomial() {
    // x1^2 * x0^3
    let (out, diag) = run_script("((1,2),3)\nDEG\nDEG_BY 0\nDEG_BY 1\nDEG_BY 2\n");
    assert_eq!(out, "5\n3\n2\n0\n");
    assert_eq!(diag, "");
}

#[test]
fn compose_command() {
    // substitute x + 1 into x^2
    let (out, diag) = run_script("(1,0)+(1,1)\n(1,2)\nCOMPOSE 1\nPRINT\n");
    assert_eq!(out, "(1,0)+(2,1)+(1,2)\n");
    assert_eq!(diag, "");
}

#[test]
fn every_error_kind_with_line_numbers() {
    let script = "FOO\nADD\nDEG_BY x\nAT\n?\nCOMPOSE -1\n";
    let (out, diag) = run_script(script);
    assert_eq!(out, "");
    assert_eq!(
        diag,
        "ERROR 1 WRONG COMMAND\n\
         ERROR 2 STACK UNDERFLOW\n\
         ERROR 3 DEG BY WRONG VARIABLE\n\
         ERROR 4 AT WRONG VALUE\n\
         ERROR 5 WRONG POLY\n\
         ERROR 6 COMPOSE WRONG PARAMETER\n"
    );
}

#[test]
fn comments_and_blank_lines_are_counted() {
    let script = "# a comment\n\n1\nPRINT\nFOO\n";
    let (out, diag) = run_script(script);
    assert_eq!(out, "1\n");
    assert_eq!(diag, "ERROR 5 WRONG COMMAND\n");
}

#[test]
fn faulty_lines_do_not_stop_the_session() {
    let script = "(1,\n2\n3\nADD\nPRINT\n";
    let (out, diag) = run_script(script);
    assert_eq!(out, "5\n");
    assert_eq!(diag, "ERROR 1 WRONG POLY\n");
}

#[test]
fn coefficients_wrap_end_to_end() {
    let (out, diag) = run_script("9223372036854775807\n1\nADD\nPRINT\n");
    assert_eq!(out, "-9223372036854775808\n");
    assert_eq!(diag, "");
}

#[test]
fn missing_final_newline() {
    let (out, diag) = run_script("42\nPRINT");
    assert_eq!(out, "42\n");
    assert_eq!(diag, "");
}

#[test]
fn underflow_leaves_operands_in_place() {
    let script = "7\nADD\nPRINT\n";
    let (out, diag) = run_script(script);
    assert_eq!(out, "7\n");
    assert_eq!(diag, "ERROR 2 STACK UNDERFLOW\n");
}

#[test]
fn redundant_input_prints_canonically() {
    let (out, diag) = run_script("(1,0)+(2,0)\nPRINT\n(2,1)+(3,0)\nPRINT\n");
    assert_eq!(out, "3\n(3,0)+(2,1)\n");
    assert_eq!(diag, "");
}

#[test]
fn compose_underflow_and_large_counts() {
    let (out, diag) = run_script("1\nCOMPOSE 1\nCOMPOSE 18446744073709551615\n");
    assert_eq!(out, "");
    assert_eq!(
        diag,
        "ERROR 2 STACK UNDERFLOW\nERROR 3 STACK UNDERFLOW\n"
    );
}
