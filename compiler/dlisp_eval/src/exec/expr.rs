//! Value reduction.

use dlisp_stack::ensure_sufficient_stack;

use super::call::call;
use crate::errors::not_a_function;
use crate::value::release_all;
use crate::{Environment, Value};

/// Evaluate `value` in `env`, consuming it.
///
/// Symbols resolve through the environment, S-Expressions are applied and
/// every other variant evaluates to itself.
pub fn eval(env: &Environment, value: Value) -> Value {
    match value {
        Value::Symbol(name) => env.get(&name).unwrap_or_else(Value::Error),
        Value::SExpr(items) => ensure_sufficient_stack(|| eval_sexpr(env, items)),
        other => other,
    }
}

/// Evaluate the elements of an S-Expression and apply the result.
///
/// The first element that evaluates to an error becomes the result; the
/// elements after it are dropped unevaluated.
pub fn eval_sexpr(env: &Environment, items: Vec<Value>) -> Value {
    let mut evaluated = Vec::with_capacity(items.len());
    let mut items = items.into_iter();
    while let Some(item) = items.next() {
        match eval(env, item) {
            Value::Error(err) => {
                tracing::trace!(error = %err, "aborting S-Expression");
                release_all(evaluated);
                release_all(items.collect());
                return Value::Error(err);
            }
            value => evaluated.push(value),
        }
    }

    if evaluated.len() <= 1 {
        return evaluated.pop().unwrap_or_else(Value::unit);
    }

    let mut args = evaluated.into_iter();
    match args.next() {
        Some(Value::Function(func)) => call(env, func, args.collect()),
        Some(other) => Value::Error(not_a_function(other.type_name())),
        None => Value::unit(),
    }
}
