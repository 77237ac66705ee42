//! Centralized error constructors for the evaluator.
//!
//! Errors are ordinary values in d-lisp: every contract violation produces a
//! [`Value::Error`](crate::Value::Error) that flows back through evaluation
//! like any other result. Construct errors only through the factory
//! functions below so that `kind` and `message` always agree.

use std::fmt;

/// Typed error category.
///
/// The `Display` impl renders the generic message for the kind; factory
/// functions that know which builtin failed prefix it with the builtin name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Lookup
    NotFound {
        name: String,
    },

    // Type
    TypeMismatch {
        expected: String,
        got: String,
    },
    NotAFunction {
        got: String,
    },
    NotASymbol {
        got: String,
    },

    // Arity
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    EmptyList {
        function: String,
    },

    // Arithmetic
    DivisionByZero,
    ModuloByZero,
    IntegerOverflow {
        operation: String,
    },

    // Reading
    InvalidNumberLiteral {
        literal: String,
    },
    Syntax {
        message: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { name } => write!(f, "unbound symbol `{name}`"),

            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::NotAFunction { got } => {
                write!(f, "first element of an S-Expression must be a Function, got {got}")
            }
            Self::NotASymbol { got } => write!(f, "expected a Symbol, got {got}"),

            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                if name.is_empty() {
                    write!(f, "expected {expected} {arg_word}, got {got}")
                } else {
                    write!(f, "`{name}` expects {expected} {arg_word}, got {got}")
                }
            }
            Self::EmptyList { function } => {
                write!(f, "`{function}` cannot be applied to an empty Q-Expression")
            }

            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ModuloByZero => write!(f, "modulo by zero"),
            Self::IntegerOverflow { operation } => {
                write!(f, "integer overflow in {operation}")
            }

            Self::InvalidNumberLiteral { literal } => {
                write!(f, "invalid number literal `{literal}`")
            }
            Self::Syntax { message } => write!(f, "syntax error: {message}"),
        }
    }
}

/// An evaluation error: structured kind plus the rendered message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }

    fn with_message(kind: EvalErrorKind, message: String) -> Self {
        EvalError { kind, message }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Lookup Errors

#[cold]
pub fn undefined_symbol(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotFound {
        name: name.to_string(),
    })
}

// Type Errors

/// A builtin received an argument of the wrong type.
#[cold]
pub fn wrong_arg_type(function: &str, expected: &str, got: &str) -> EvalError {
    EvalError::with_message(
        EvalErrorKind::TypeMismatch {
            expected: expected.to_string(),
            got: got.to_string(),
        },
        format!("`{function}` expected {expected}, got {got}"),
    )
}

#[cold]
pub fn not_a_function(got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAFunction {
        got: got.to_string(),
    })
}

/// A formals or definition list held something other than a Symbol.
#[cold]
pub fn not_a_symbol(function: &str, got: &str) -> EvalError {
    EvalError::with_message(
        EvalErrorKind::NotASymbol {
            got: got.to_string(),
        },
        format!("`{function}` can only bind Symbols, got {got}"),
    )
}

// Arity Errors

/// A builtin received the wrong number of arguments.
#[cold]
pub fn wrong_arg_count(function: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: function.to_string(),
        expected,
        got,
    })
}

/// A closure received the wrong number of arguments.
#[cold]
pub fn wrong_function_args(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: String::new(),
        expected,
        got,
    })
}

/// `def`/`=` received a different number of values than symbols.
#[cold]
pub fn wrong_binding_count(function: &str, symbols: usize, values: usize) -> EvalError {
    EvalError::with_message(
        EvalErrorKind::ArityMismatch {
            name: function.to_string(),
            expected: symbols,
            got: values,
        },
        format!("`{function}` cannot bind {symbols} symbols to {values} values"),
    )
}

#[cold]
pub fn empty_list(function: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptyList {
        function: function.to_string(),
    })
}

// Arithmetic Errors

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

// Reading Errors

#[cold]
pub fn invalid_number_literal(literal: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidNumberLiteral {
        literal: literal.to_string(),
    })
}

#[cold]
pub fn syntax_error(err: &dlisp_reader::ParseError) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Syntax {
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests;
