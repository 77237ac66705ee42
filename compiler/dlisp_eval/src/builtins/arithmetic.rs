//! Arithmetic builtins: `+ - * / %`.
//!
//! All arithmetic is checked. Overflow is an error value rather than a
//! wrap or a panic.

use crate::errors::{
    division_by_zero, integer_overflow, modulo_by_zero, wrong_arg_count, wrong_arg_type,
    EvalError,
};
use crate::value::release_all;
use crate::{Environment, EvalResult, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl ArithOp {
    fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Rem => "%",
        }
    }

    fn apply(self, a: i64, b: i64) -> Result<i64, EvalError> {
        match self {
            ArithOp::Add => a.checked_add(b).ok_or_else(|| integer_overflow("addition")),
            ArithOp::Sub => a
                .checked_sub(b)
                .ok_or_else(|| integer_overflow("subtraction")),
            ArithOp::Mul => a
                .checked_mul(b)
                .ok_or_else(|| integer_overflow("multiplication")),
            ArithOp::Div if b == 0 => Err(division_by_zero()),
            ArithOp::Div => a.checked_div(b).ok_or_else(|| integer_overflow("division")),
            ArithOp::Rem if b == 0 => Err(modulo_by_zero()),
            ArithOp::Rem => a.checked_rem(b).ok_or_else(|| integer_overflow("remainder")),
        }
    }
}

fn arithmetic(op: ArithOp, args: Vec<Value>) -> EvalResult {
    let result = fold(op, &args);
    release_all(args);
    result
}

/// Fold `args` left to right with `op`. A lone argument to `-` is negated.
fn fold(op: ArithOp, args: &[Value]) -> EvalResult {
    let numbers = args
        .iter()
        .map(|arg| {
            arg.as_number()
                .ok_or_else(|| wrong_arg_type(op.symbol(), "Number", arg.type_name()))
        })
        .collect::<Result<Vec<i64>, EvalError>>()?;

    let Some((&first, rest)) = numbers.split_first() else {
        return Err(wrong_arg_count(op.symbol(), 1, 0));
    };

    if rest.is_empty() && op == ArithOp::Sub {
        return first
            .checked_neg()
            .map(Value::Number)
            .ok_or_else(|| integer_overflow("negation"));
    }

    rest.iter()
        .try_fold(first, |acc, &n| op.apply(acc, n))
        .map(Value::Number)
}

pub(super) fn builtin_add(_env: &Environment, args: Vec<Value>) -> EvalResult {
    arithmetic(ArithOp::Add, args)
}

pub(super) fn builtin_sub(_env: &Environment, args: Vec<Value>) -> EvalResult {
    arithmetic(ArithOp::Sub, args)
}

pub(super) fn builtin_mul(_env: &Environment, args: Vec<Value>) -> EvalResult {
    arithmetic(ArithOp::Mul, args)
}

pub(super) fn builtin_div(_env: &Environment, args: Vec<Value>) -> EvalResult {
    arithmetic(ArithOp::Div, args)
}

pub(super) fn builtin_rem(_env: &Environment, args: Vec<Value>) -> EvalResult {
    arithmetic(ArithOp::Rem, args)
}
