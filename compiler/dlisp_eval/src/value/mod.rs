//! Runtime values for the d-lisp evaluator.
//!
//! # Ownership
//!
//! Every `Value` owns its payload outright: lists own their elements and a
//! closure owns its formals, body and private [`Scope`]. `Clone` is
//! therefore a deep copy for everything except [`Builtin`], which is a
//! plain function reference and copies by reference.
//!
//! Environments hand out clones on lookup, so evaluation can consume the
//! values it fetches without disturbing the stored binding.

mod function;

use std::fmt::{self, Write as _};

use dlisp_stack::ensure_sufficient_stack;

pub use function::{Builtin, BuiltinFn, Closure, Function};

use crate::errors::EvalError;

/// Result of evaluating a builtin before it is folded back into a value.
pub type EvalResult = Result<Value, EvalError>;

/// Runtime value in the d-lisp interpreter.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// 64-bit signed integer.
    Number(i64),
    /// String literal value (stored unescaped).
    String(String),
    /// Name resolved through the environment when evaluated.
    Symbol(String),
    /// Terminal error value; propagates instead of being evaluated.
    Error(EvalError),
    /// Active expression list. Empty means unit.
    SExpr(Vec<Value>),
    /// Quoted list, never evaluated implicitly.
    QExpr(Vec<Value>),
    /// Builtin or user closure.
    Function(Function),
}

// Factory Methods

impl Value {
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    #[inline]
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// The empty S-Expression.
    #[inline]
    pub fn unit() -> Self {
        Value::SExpr(Vec::new())
    }

    #[inline]
    pub fn builtin(name: &'static str, func: BuiltinFn) -> Self {
        Value::Function(Function::Builtin(Builtin::new(name, func)))
    }

    #[inline]
    pub fn closure(closure: Closure) -> Self {
        Value::Function(Function::Closure(closure))
    }
}

impl From<EvalError> for Value {
    fn from(err: EvalError) -> Self {
        Value::Error(err)
    }
}

impl From<EvalResult> for Value {
    fn from(result: EvalResult) -> Self {
        result.unwrap_or_else(Value::Error)
    }
}

// Value Methods

impl Value {
    /// Name of the variant as shown in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::String(_) => "String",
            Value::Symbol(_) => "Symbol",
            Value::Error(_) => "Error",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
            Value::Function(_) => "Function",
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// True for the empty S-Expression.
    #[inline]
    pub fn is_unit(&self) -> bool {
        matches!(self, Value::SExpr(items) if items.is_empty())
    }

    #[inline]
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Drop `self` without recursing once per nesting level.
    ///
    /// Plain `drop` recurses through nested lists and can exhaust the native
    /// stack on trees the reader and evaluator handle fine.
    pub fn release(self) {
        release_all(vec![self]);
    }
}

/// Drop every value in `pending`, flattening nested lists and closures.
pub(crate) fn release_all(mut pending: Vec<Value>) {
    while let Some(value) = pending.pop() {
        match value {
            Value::SExpr(items) | Value::QExpr(items) => pending.extend(items),
            Value::Function(Function::Closure(closure)) => {
                let (_, body, scope) = closure.into_parts();
                pending.extend(body);
                pending.extend(scope.into_values());
            }
            _ => {}
        }
    }
}

// Rendering

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write_escaped(f, s),
            Value::Symbol(name) => f.write_str(name),
            Value::Error(err) => write!(f, "Error: {err}"),
            Value::SExpr(items) => write_list(f, items, '(', ')'),
            Value::QExpr(items) => write_list(f, items, '{', '}'),
            Value::Function(func) => write!(f, "{func}"),
        }
    }
}

/// Write `items` space-separated between `open` and `close`.
pub(crate) fn write_list(
    f: &mut fmt::Formatter<'_>,
    items: &[Value],
    open: char,
    close: char,
) -> fmt::Result {
    f.write_char(open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_char(' ')?;
        }
        ensure_sufficient_stack(|| write!(f, "{item}"))?;
    }
    f.write_char(close)
}

/// Write `s` as a quoted literal the reader accepts back.
fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            '\0' => f.write_str("\\0")?,
            c if c.is_control() => write!(f, "\\u{{{:x}}}", u32::from(c))?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}
