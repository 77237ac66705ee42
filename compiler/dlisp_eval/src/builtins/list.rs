//! Q-Expression builtins: `list`, `head`, `tail`, `eval`, `join`.

use super::{expect_qexpr, single_qexpr};
use crate::errors::{empty_list, wrong_arg_type};
use crate::exec::eval;
use crate::value::release_all;
use crate::{Environment, EvalResult, Value};

/// `list a b ...` → `{a b ...}`
pub(super) fn builtin_list(_env: &Environment, args: Vec<Value>) -> EvalResult {
    Ok(Value::QExpr(args))
}

/// `head {a b ...}` → `{a}`
pub(super) fn builtin_head(_env: &Environment, args: Vec<Value>) -> EvalResult {
    let mut items = single_qexpr("head", args)?;
    if items.is_empty() {
        return Err(empty_list("head"));
    }
    release_all(items.split_off(1));
    Ok(Value::QExpr(items))
}

/// `tail {a b ...}` → `{b ...}`
pub(super) fn builtin_tail(_env: &Environment, args: Vec<Value>) -> EvalResult {
    let mut items = single_qexpr("tail", args)?;
    if items.is_empty() {
        return Err(empty_list("tail"));
    }
    items.remove(0).release();
    Ok(Value::QExpr(items))
}

/// `eval {f a b}` evaluates `(f a b)` in the calling environment.
pub(super) fn builtin_eval(env: &Environment, args: Vec<Value>) -> EvalResult {
    let items = single_qexpr("eval", args)?;
    Ok(eval(env, Value::SExpr(items)))
}

/// `join {a} {b c}` → `{a b c}`
pub(super) fn builtin_join(_env: &Environment, args: Vec<Value>) -> EvalResult {
    if let Some(bad) = args.iter().find(|arg| !matches!(arg, Value::QExpr(_))) {
        return Err(wrong_arg_type("join", "Q-Expression", bad.type_name()));
    }

    let mut joined = Vec::new();
    for arg in args {
        joined.extend(expect_qexpr("join", arg)?);
    }
    Ok(Value::QExpr(joined))
}
