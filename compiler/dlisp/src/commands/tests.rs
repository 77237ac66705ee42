use super::*;
use pretty_assertions::assert_eq;

fn run(source: &str) -> (bool, String) {
    let interp = Interpreter::new();
    let mut output = Vec::new();
    let ok = run_source(&interp, source, &mut output).unwrap();
    (ok, String::from_utf8(output).unwrap())
}

#[test]
fn test_run_prints_non_unit_results() {
    let (ok, output) = run(
        "; squares\n\
         (fn {square n} {* n n})\n\
         (def {x} 4)\n\
         (square x)\n\
         (join {1} {2})\n",
    );
    assert!(ok);
    assert_eq!(output, "(\\ {n} {* n n})\n16\n{1 2}\n");
}

#[test]
fn test_run_reports_errors_and_continues() {
    let (ok, output) = run("(head {}) (+ 1 2)");
    assert!(!ok);
    assert_eq!(
        output,
        "Error: `head` cannot be applied to an empty Q-Expression\n3\n"
    );
}

#[test]
fn test_run_empty_source() {
    assert_eq!(run(""), (true, String::new()));
}

#[test]
fn test_eval_prints_result() {
    let interp = Interpreter::new();
    let mut output = Vec::new();
    assert!(eval_source(&interp, "+ 1 2 3", &mut output).unwrap());
    assert_eq!(String::from_utf8(output).unwrap(), "6\n");
}

#[test]
fn test_eval_unit_and_error() {
    let interp = Interpreter::new();
    let mut output = Vec::new();
    assert!(eval_source(&interp, "def {y} 1", &mut output).unwrap());
    assert!(!eval_source(&interp, "nope", &mut output).unwrap());
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "()\nError: unbound symbol `nope`\n"
    );
}
