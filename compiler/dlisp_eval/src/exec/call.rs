//! Function application.

use crate::errors::wrong_function_args;
use crate::value::{release_all, Closure, Function};
use crate::{Environment, Value};

use super::expr::eval;

/// Apply `func` to already-evaluated `args` from the calling environment `env`.
pub fn call(env: &Environment, func: Function, args: Vec<Value>) -> Value {
    match func {
        Function::Builtin(builtin) => builtin.call(env, args).into(),
        Function::Closure(closure) => apply_closure(env, closure, args),
    }
}

/// Bind `args` to the closure's formals and evaluate its body.
///
/// The closure's own scope becomes the call environment, with its parent
/// link pointing at the caller. The body therefore sees the parameters, then
/// anything the closure defined locally, then the caller's bindings.
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(arity = closure.arity(), args = args.len())
)]
fn apply_closure(env: &Environment, closure: Closure, args: Vec<Value>) -> Value {
    if args.len() != closure.arity() {
        let err = wrong_function_args(closure.arity(), args.len());
        release_all(args);
        Value::closure(closure).release();
        return Value::Error(err);
    }

    let (formals, body, scope) = closure.into_parts();
    let call_env = Environment::from_scope(scope);
    for (formal, arg) in formals.iter().zip(&args) {
        call_env.define_local(formal, arg);
    }
    call_env.set_parent(env);
    release_all(args);

    eval(&call_env, Value::SExpr(body))
}
