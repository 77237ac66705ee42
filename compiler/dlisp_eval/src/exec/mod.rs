//! Evaluation rules.
//!
//! - `expr`: reducing a value (symbol lookup, S-Expression evaluation)
//! - `call`: applying builtins and closures to evaluated arguments

pub mod call;
pub mod expr;

pub use call::call;
pub use expr::{eval, eval_sexpr};
