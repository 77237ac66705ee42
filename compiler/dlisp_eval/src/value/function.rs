//! Function values: builtins and user closures.

use std::fmt;

use super::{write_list, EvalResult, Value};
use crate::environment::{Environment, Scope};

/// Signature every builtin implements.
///
/// Builtins receive already-evaluated arguments and own them.
pub type BuiltinFn = fn(&Environment, Vec<Value>) -> EvalResult;

/// Callable value.
#[derive(Clone, Debug, PartialEq)]
pub enum Function {
    Builtin(Builtin),
    Closure(Closure),
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Function::Builtin(_) => f.write_str("<builtin>"),
            Function::Closure(closure) => write!(f, "{closure}"),
        }
    }
}

/// Primitive operation implemented in Rust.
///
/// Stateless and immutable, so copies share the same function pointer.
#[derive(Clone, Copy)]
pub struct Builtin {
    name: &'static str,
    func: BuiltinFn,
}

impl Builtin {
    #[inline]
    pub fn new(name: &'static str, func: BuiltinFn) -> Self {
        Builtin { name, func }
    }

    /// Name the builtin is registered under.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn call(&self, env: &Environment, args: Vec<Value>) -> EvalResult {
        (self.func)(env, args)
    }
}

// Builtins are identified by registration name; comparing fn pointers is not
// reliable across codegen units.
impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

/// User-defined function built by `\` or `fn`.
///
/// Owns a private [`Scope`] that starts empty. Each call binds the formals
/// into that scope and links it to the caller's environment, so the body
/// sees its own parameters first and the caller's bindings after.
#[derive(Clone, Debug, PartialEq)]
pub struct Closure {
    formals: Vec<String>,
    body: Vec<Value>,
    scope: Scope,
}

impl Closure {
    /// Build a closure with a fresh, parentless scope.
    pub fn new(formals: Vec<String>, body: Vec<Value>) -> Self {
        Closure {
            formals,
            body,
            scope: Scope::new(),
        }
    }

    /// Build a closure over an existing scope.
    pub fn with_scope(formals: Vec<String>, body: Vec<Value>, scope: Scope) -> Self {
        Closure {
            formals,
            body,
            scope,
        }
    }

    #[inline]
    pub fn body(&self) -> &[Value] {
        &self.body
    }

    #[inline]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Number of arguments a call must supply.
    #[inline]
    pub fn arity(&self) -> usize {
        self.formals.len()
    }

    /// Split into formals, body and scope for application.
    pub(crate) fn into_parts(self) -> (Vec<String>, Vec<Value>, Scope) {
        (self.formals, self.body, self.scope)
    }
}

impl fmt::Display for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(\\ {")?;
        f.write_str(&self.formals.join(" "))?;
        f.write_str("} ")?;
        write_list(f, &self.body, '{', '}')?;
        f.write_str(")")
    }
}
