use super::*;
use crate::errors::EvalErrorKind;
use crate::value::Function;
use crate::Interpreter;
use pretty_assertions::assert_eq;

/// Evaluate one line and render the result.
fn run(interp: &Interpreter, source: &str) -> String {
    interp.eval_line(source).to_string()
}

fn kind_of(interp: &Interpreter, source: &str) -> EvalErrorKind {
    match interp.eval_line(source) {
        Value::Error(err) => err.kind,
        other => panic!("`{source}` should fail, got {other}"),
    }
}

#[test]
fn test_install_binds_every_builtin() {
    let env = Environment::new();
    install(&env);
    assert_eq!(env.len(), BUILTINS.len());
    for &(name, _) in BUILTINS {
        let Ok(Value::Function(Function::Builtin(builtin))) = env.get(name) else {
            panic!("{name} not installed as a builtin");
        };
        assert_eq!(builtin.name(), name);
    }
}

#[test]
fn test_every_builtin_is_reachable_from_source() {
    let interp = Interpreter::new();
    for &(name, _) in BUILTINS {
        assert_eq!(run(&interp, name), "<builtin>", "`{name}` did not read back");
    }
}

#[test]
fn test_modulo_from_source() {
    let interp = Interpreter::new();
    assert_eq!(run(&interp, "% -7 2"), "-1");
    assert!(matches!(
        kind_of(&interp, "% (- -9223372036854775807 1) -1"),
        EvalErrorKind::IntegerOverflow { .. }
    ));
}

// Arithmetic

#[test]
fn test_arithmetic_folds_left() {
    let interp = Interpreter::new();
    assert_eq!(run(&interp, "+ 1 2 3"), "6");
    assert_eq!(run(&interp, "- 10 4 3"), "3");
    assert_eq!(run(&interp, "* 2 3 4"), "24");
    assert_eq!(run(&interp, "/ 100 5 2"), "10");
    assert_eq!(run(&interp, "% 17 5"), "2");
    assert_eq!(run(&interp, "(+ 1 (* 2 3))"), "7");
}

#[test]
fn test_unary_minus() {
    let interp = Interpreter::new();
    assert_eq!(run(&interp, "- 5"), "-5");
    assert_eq!(run(&interp, "- -5"), "5");
    // Only `-` treats a lone argument specially.
    assert_eq!(run(&interp, "+ 5"), "5");
}

#[test]
fn test_division_and_modulo_by_zero() {
    let interp = Interpreter::new();
    assert_eq!(kind_of(&interp, "/ 4 0"), EvalErrorKind::DivisionByZero);
    assert_eq!(kind_of(&interp, "% 4 0"), EvalErrorKind::ModuloByZero);
    assert_eq!(run(&interp, "/ 4 0"), "Error: division by zero");
}

#[test]
fn test_arithmetic_overflow() {
    let interp = Interpreter::new();
    for source in [
        "+ 9223372036854775807 1",
        "* 9223372036854775807 2",
        "- -9223372036854775807 2",
        "/ (- -9223372036854775807 1) -1",
        "- (- -9223372036854775807 1)",
    ] {
        assert!(
            matches!(kind_of(&interp, source), EvalErrorKind::IntegerOverflow { .. }),
            "{source}"
        );
    }
}

#[test]
fn test_arithmetic_rejects_non_numbers() {
    let interp = Interpreter::new();
    assert_eq!(
        kind_of(&interp, "+ 1 {2}"),
        EvalErrorKind::TypeMismatch {
            expected: "Number".to_string(),
            got: "Q-Expression".to_string(),
        }
    );
    assert_eq!(run(&interp, "* 2 \"x\""), "Error: `*` expected Number, got String");
}

#[test]
fn test_arithmetic_without_arguments() {
    let env = Environment::new();
    let result = arithmetic::builtin_add(&env, Vec::new());
    assert!(matches!(
        result,
        Err(ref err) if matches!(err.kind, EvalErrorKind::ArityMismatch { expected: 1, got: 0, .. })
    ));
}

// Lists

#[test]
fn test_list_relabels() {
    let interp = Interpreter::new();
    assert_eq!(run(&interp, "list 1 2 (+ 1 2)"), "{1 2 3}");
}

#[test]
fn test_head_and_tail() {
    let interp = Interpreter::new();
    assert_eq!(run(&interp, "head {1 2 3}"), "{1}");
    assert_eq!(run(&interp, "tail {1 2 3}"), "{2 3}");
    assert_eq!(run(&interp, "tail {1}"), "{}");
    assert_eq!(run(&interp, "head {(+ 1 2) x}"), "{(+ 1 2)}");
}

#[test]
fn test_head_and_tail_preconditions() {
    let interp = Interpreter::new();
    assert_eq!(
        kind_of(&interp, "head {}"),
        EvalErrorKind::EmptyList {
            function: "head".to_string()
        }
    );
    assert_eq!(
        kind_of(&interp, "tail {}"),
        EvalErrorKind::EmptyList {
            function: "tail".to_string()
        }
    );
    assert!(matches!(
        kind_of(&interp, "head {1} {2}"),
        EvalErrorKind::ArityMismatch { expected: 1, got: 2, .. }
    ));
    assert!(matches!(
        kind_of(&interp, "tail 1"),
        EvalErrorKind::TypeMismatch { .. }
    ));
}

#[test]
fn test_eval_builtin() {
    let interp = Interpreter::new();
    assert_eq!(run(&interp, "eval {+ 1 2}"), "3");
    assert_eq!(run(&interp, "eval (head {(+ 1 2) (+ 10 20)})"), "3");
    assert_eq!(run(&interp, "eval {}"), "()");
    assert!(matches!(
        kind_of(&interp, "eval 1"),
        EvalErrorKind::TypeMismatch { .. }
    ));
}

#[test]
fn test_join() {
    let interp = Interpreter::new();
    assert_eq!(run(&interp, "join {1} {2 3}"), "{1 2 3}");
    assert_eq!(run(&interp, "join {} {a} {} {b}"), "{a b}");
    assert_eq!(
        kind_of(&interp, "join {1} 2"),
        EvalErrorKind::TypeMismatch {
            expected: "Q-Expression".to_string(),
            got: "Number".to_string(),
        }
    );
}

// Definitions

#[test]
fn test_def_binds_globally() {
    let interp = Interpreter::new();
    assert_eq!(run(&interp, "def {x y} 5 6"), "()");
    assert_eq!(run(&interp, "+ x y"), "11");
    assert_eq!(interp.env().get("x"), Ok(Value::Number(5)));
}

#[test]
fn test_def_with_computed_names() {
    let interp = Interpreter::new();
    assert_eq!(run(&interp, "def (tail {x y}) 7"), "()");
    assert_eq!(run(&interp, "y"), "7");
    assert!(interp.env().get("x").is_err());
}

#[test]
fn test_def_preconditions() {
    let interp = Interpreter::new();
    assert!(matches!(
        kind_of(&interp, "def {x y} 1"),
        EvalErrorKind::ArityMismatch { expected: 2, got: 1, .. }
    ));
    assert_eq!(
        kind_of(&interp, "def {x 1} 1 2"),
        EvalErrorKind::NotASymbol {
            got: "Number".to_string()
        }
    );
    assert!(matches!(
        kind_of(&interp, "def 1 2"),
        EvalErrorKind::TypeMismatch { .. }
    ));
    // Nothing was bound by the failed attempts.
    assert!(interp.env().get("x").is_err());
}

#[test]
fn test_local_define_stays_in_call() {
    let interp = Interpreter::new();
    run(&interp, "def {set-local} (\\ {v} {= {tmp} v})");
    assert_eq!(run(&interp, "set-local 3"), "()");
    assert!(interp.env().get("tmp").is_err());

    run(&interp, "def {set-global} (\\ {v} {def {tmp} v})");
    assert_eq!(run(&interp, "set-global 3"), "()");
    assert_eq!(interp.env().get("tmp"), Ok(Value::Number(3)));
}

#[test]
fn test_local_define_at_top_level() {
    let interp = Interpreter::new();
    assert_eq!(run(&interp, "= {z} 9"), "()");
    assert_eq!(run(&interp, "z"), "9");
}

// Functions

#[test]
fn test_lambda_builds_closure() {
    let interp = Interpreter::new();
    assert_eq!(run(&interp, "\\ {x y} {+ x y}"), "(\\ {x y} {+ x y})");
    assert_eq!(run(&interp, "(\\ {x y} {+ x y}) 2 3"), "5");
}

#[test]
fn test_lambda_preconditions() {
    let interp = Interpreter::new();
    assert!(matches!(
        kind_of(&interp, "\\ {x}"),
        EvalErrorKind::ArityMismatch { expected: 2, got: 1, .. }
    ));
    assert!(matches!(
        kind_of(&interp, "\\ {x} 1"),
        EvalErrorKind::TypeMismatch { .. }
    ));
    assert!(matches!(
        kind_of(&interp, "\\ {1} {1}"),
        EvalErrorKind::NotASymbol { .. }
    ));
}

#[test]
fn test_fn_defines_and_returns() {
    let interp = Interpreter::new();
    assert_eq!(run(&interp, "fn {add x y} {+ x y}"), "(\\ {x y} {+ x y})");
    assert_eq!(run(&interp, "add 20 22"), "42");
}

#[test]
fn test_fn_requires_a_name() {
    let interp = Interpreter::new();
    assert_eq!(
        kind_of(&interp, "fn {} {1}"),
        EvalErrorKind::EmptyList {
            function: "fn".to_string()
        }
    );
}

#[test]
fn test_fn_recursion_through_global() {
    let interp = Interpreter::new();
    // No conditionals in the language: recurse through `eval` on a selected branch.
    run(&interp, "fn {count-down xs} {eval (head (join {(count-down (tail xs))} {xs}))}");
    // Calling with a non-empty list keeps recursing until `tail` fails on `{}`.
    assert_eq!(
        kind_of(&interp, "count-down {1 2 3}"),
        EvalErrorKind::EmptyList {
            function: "tail".to_string()
        }
    );
}
