//! Builtin registry.
//!
//! The set of primitives is fixed. [`install`] binds every entry of
//! [`BUILTINS`] into a root environment once at interpreter start; after
//! that, builtins are ordinary values that can be passed around, stored in
//! lists and rebound like anything else.

mod arithmetic;
mod define;
mod list;

use crate::errors::{wrong_arg_count, wrong_arg_type, EvalError};
use crate::value::BuiltinFn;
use crate::{Environment, Value};

/// Every builtin, by the name it is bound under.
pub const BUILTINS: &[(&str, BuiltinFn)] = &[
    // List manipulation
    ("list", list::builtin_list),
    ("head", list::builtin_head),
    ("tail", list::builtin_tail),
    ("eval", list::builtin_eval),
    ("join", list::builtin_join),
    // Arithmetic
    ("+", arithmetic::builtin_add),
    ("-", arithmetic::builtin_sub),
    ("*", arithmetic::builtin_mul),
    ("/", arithmetic::builtin_div),
    ("%", arithmetic::builtin_rem),
    // Definition
    ("def", define::builtin_def),
    ("=", define::builtin_put),
    // Functions
    ("\\", define::builtin_lambda),
    ("fn", define::builtin_fn),
];

/// Bind every builtin into `env`.
pub fn install(env: &Environment) {
    for &(name, func) in BUILTINS {
        env.define_local(name, &Value::builtin(name, func));
    }
    tracing::debug!(count = BUILTINS.len(), "installed builtins");
}

// Argument validation helpers

/// Require exactly `expected` arguments.
fn check_arg_count(function: &str, expected: usize, args: &[Value]) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(wrong_arg_count(function, expected, args.len()))
    }
}

/// Unwrap a Q-Expression argument into its elements.
fn expect_qexpr(function: &str, value: Value) -> Result<Vec<Value>, EvalError> {
    match value {
        Value::QExpr(items) => Ok(items),
        other => Err(wrong_arg_type(function, "Q-Expression", other.type_name())),
    }
}

/// Require exactly one argument and that it is a Q-Expression.
fn single_qexpr(function: &str, args: Vec<Value>) -> Result<Vec<Value>, EvalError> {
    check_arg_count(function, 1, &args)?;
    let mut args = args.into_iter();
    match args.next() {
        Some(value) => expect_qexpr(function, value),
        None => Err(wrong_arg_count(function, 1, 0)),
    }
}

#[cfg(test)]
mod tests;
