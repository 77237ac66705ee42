#![deny(clippy::arithmetic_side_effects)]
//! dlisp Eval - evaluator for the d-lisp expression language.
//!
//! # Architecture
//!
//! - `Value`: owned value tree (numbers, strings, symbols, errors,
//!   S-/Q-Expressions, functions)
//! - `Environment`: ordered bindings with a weak parent link
//! - `eval` / `eval_sexpr` / `call`: the tree-walking evaluator
//! - `builtins`: the fixed primitive set, installed into a root environment
//! - `read`: folding the reader's node tree into values
//! - `Interpreter`: root environment plus read-eval entry points
//!
//! Errors are values. A failing builtin or lookup yields `Value::Error`,
//! which aborts the enclosing S-Expression and becomes its result.

mod builtins;
mod environment;
pub mod errors;
pub mod exec;
mod interpreter;
mod read;
mod value;

pub use builtins::{install as install_builtins, BUILTINS};
pub use environment::{Environment, Scope};
pub use errors::{EvalError, EvalErrorKind};
pub use exec::{call, eval, eval_sexpr};
pub use interpreter::Interpreter;
pub use read::read;
pub use value::{Builtin, BuiltinFn, Closure, EvalResult, Function, Value};
