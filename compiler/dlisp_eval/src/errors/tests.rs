use super::*;
use pretty_assertions::assert_eq;

// Kind → message

#[test]
fn undefined_symbol_has_correct_kind() {
    let err = undefined_symbol("x");
    assert_eq!(
        err.kind,
        EvalErrorKind::NotFound {
            name: "x".to_string()
        }
    );
    assert_eq!(err.message, "unbound symbol `x`");
}

#[test]
fn division_by_zero_has_correct_kind() {
    let err = division_by_zero();
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    assert_eq!(err.message, "division by zero");
}

#[test]
fn modulo_by_zero_has_correct_kind() {
    let err = modulo_by_zero();
    assert_eq!(err.kind, EvalErrorKind::ModuloByZero);
    assert_eq!(err.message, "modulo by zero");
}

#[test]
fn wrong_arg_type_names_the_builtin() {
    let err = wrong_arg_type("head", "Q-Expression", "Number");
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeMismatch {
            expected: "Q-Expression".to_string(),
            got: "Number".to_string(),
        }
    );
    assert_eq!(err.message, "`head` expected Q-Expression, got Number");
}

#[test]
fn closure_arity_mismatch_has_no_name() {
    let err = wrong_function_args(2, 1);
    assert_eq!(
        err.kind,
        EvalErrorKind::ArityMismatch {
            name: String::new(),
            expected: 2,
            got: 1,
        }
    );
    assert_eq!(err.message, "expected 2 arguments, got 1");
}

#[test]
fn builtin_arity_mismatch_singular() {
    let err = wrong_arg_count("eval", 1, 3);
    assert_eq!(err.message, "`eval` expects 1 argument, got 3");
}

#[test]
fn binding_count_is_an_arity_mismatch() {
    let err = wrong_binding_count("def", 2, 1);
    assert!(matches!(
        err.kind,
        EvalErrorKind::ArityMismatch {
            expected: 2,
            got: 1,
            ..
        }
    ));
    assert_eq!(err.message, "`def` cannot bind 2 symbols to 1 values");
}

#[test]
fn not_a_function_reports_type() {
    assert_eq!(
        not_a_function("Number").message,
        "first element of an S-Expression must be a Function, got Number"
    );
}

#[test]
fn invalid_number_literal_keeps_text() {
    let err = invalid_number_literal("99999999999999999999");
    assert_eq!(
        err.message,
        "invalid number literal `99999999999999999999`"
    );
}

#[test]
fn syntax_error_wraps_reader_message() {
    let parse_err = dlisp_reader::ParseError::UnexpectedCloser {
        found: ')',
        span: dlisp_reader::Span::new(0, 1),
    };
    let err = syntax_error(&parse_err);
    assert_eq!(err.message, "syntax error: unexpected `)` at 0..1");
}

#[test]
fn display_is_the_message() {
    assert_eq!(empty_list("tail").to_string(), "`tail` cannot be applied to an empty Q-Expression");
}
