//! Binding builtins: `def`, `=`, `\` and `fn`.

use super::{check_arg_count, expect_qexpr};
use crate::errors::{empty_list, not_a_symbol, wrong_arg_count, wrong_binding_count, EvalError};
use crate::value::{release_all, Closure};
use crate::{Environment, EvalResult, Value};

/// Where a definition lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Target {
    /// Root of the environment chain (`def`).
    Global,
    /// The environment the builtin was called from (`=`).
    Local,
}

/// Unwrap a list of Symbols into their names.
fn symbol_names(function: &str, items: Vec<Value>) -> Result<Vec<String>, EvalError> {
    items
        .into_iter()
        .map(|item| match item {
            Value::Symbol(name) => Ok(name),
            other => Err(not_a_symbol(function, other.type_name())),
        })
        .collect()
}

/// `def {a b} 1 2` / `= {a b} 1 2`
fn define(env: &Environment, args: Vec<Value>, function: &str, target: Target) -> EvalResult {
    let mut args = args.into_iter();
    let Some(first) = args.next() else {
        return Err(wrong_arg_count(function, 1, 0));
    };
    let names = symbol_names(function, expect_qexpr(function, first)?)?;
    let values: Vec<Value> = args.collect();

    if names.len() != values.len() {
        return Err(wrong_binding_count(function, names.len(), values.len()));
    }

    for (name, value) in names.iter().zip(&values) {
        tracing::debug!(%name, ?target, "define");
        match target {
            Target::Global => env.define_global(name, value),
            Target::Local => env.define_local(name, value),
        }
    }
    release_all(values);
    Ok(Value::unit())
}

pub(super) fn builtin_def(env: &Environment, args: Vec<Value>) -> EvalResult {
    define(env, args, "def", Target::Global)
}

pub(super) fn builtin_put(env: &Environment, args: Vec<Value>) -> EvalResult {
    define(env, args, "=", Target::Local)
}

/// Split `{formals} {body}` into symbol names and body elements.
fn formals_and_body(
    function: &str,
    args: Vec<Value>,
) -> Result<(Vec<String>, Vec<Value>), EvalError> {
    check_arg_count(function, 2, &args)?;
    let mut args = args.into_iter();
    let (Some(formals), Some(body)) = (args.next(), args.next()) else {
        return Err(wrong_arg_count(function, 2, 0));
    };
    let formals = expect_qexpr(function, formals)?;
    let body = expect_qexpr(function, body)?;
    Ok((symbol_names(function, formals)?, body))
}

/// `\ {x y} {+ x y}`
pub(super) fn builtin_lambda(_env: &Environment, args: Vec<Value>) -> EvalResult {
    let (formals, body) = formals_and_body("\\", args)?;
    Ok(Value::closure(Closure::new(formals, body)))
}

/// `fn {add x y} {+ x y}` defines `add` globally and returns it.
pub(super) fn builtin_fn(env: &Environment, args: Vec<Value>) -> EvalResult {
    let (mut formals, body) = formals_and_body("fn", args)?;
    if formals.is_empty() {
        return Err(empty_list("fn"));
    }
    let name = formals.remove(0);
    let closure = Value::closure(Closure::new(formals, body));

    tracing::debug!(%name, "define function");
    env.define_global(&name, &closure);
    Ok(closure)
}
