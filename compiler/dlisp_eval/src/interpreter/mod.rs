//! Interpreter facade: a root environment plus the read-eval entry points.

use dlisp_reader::parse;

use crate::errors::syntax_error;
use crate::exec::eval;
use crate::read::read;
use crate::{builtins, Environment, Value};

/// Owns the root environment for a session.
///
/// Builtins are installed on construction. Definitions made by `def` and
/// `fn` persist across calls on the same interpreter.
pub struct Interpreter {
    env: Environment,
}

impl Interpreter {
    pub fn new() -> Self {
        let env = Environment::new();
        builtins::install(&env);
        Interpreter { env }
    }

    /// The root environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Evaluate an already-read value in the root environment.
    pub fn eval(&self, value: Value) -> Value {
        eval(&self.env, value)
    }

    /// Read `source` as one program and evaluate it as a single S-Expression.
    ///
    /// `+ 1 2` on its own evaluates to `3`, the way a REPL line does. Parse
    /// failures come back as error values.
    pub fn eval_line(&self, source: &str) -> Value {
        match read_program(source) {
            Ok(items) => self.eval(Value::SExpr(items)),
            Err(err) => err,
        }
    }

    /// Read `source` and evaluate each top-level expression in order.
    ///
    /// Errors do not stop later expressions, matching how a file of
    /// definitions behaves when fed line by line.
    pub fn eval_program(&self, source: &str) -> Vec<Value> {
        match read_program(source) {
            Ok(items) => items.into_iter().map(|item| self.eval(item)).collect(),
            Err(err) => vec![err],
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse and fold `source` into its top-level values.
fn read_program(source: &str) -> Result<Vec<Value>, Value> {
    let program = parse(source).map_err(|err| Value::Error(syntax_error(&err)))?;
    match read(&program) {
        Some(Value::SExpr(items)) => Ok(items),
        _ => Ok(Vec::new()),
    }
}
