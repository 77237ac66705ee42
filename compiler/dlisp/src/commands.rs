//! Non-interactive commands: `run` and `eval`.
//!
//! Both return `Ok(false)` when any evaluated expression produced an error
//! value, so the binary can report a failing exit status.

use std::io::{self, Write};

use dlisp_eval::Interpreter;

/// Evaluate every top-level expression of `source` in order.
///
/// Non-unit results are printed one per line; definitions print nothing.
pub fn run_source<W: Write>(
    interp: &Interpreter,
    source: &str,
    mut output: W,
) -> io::Result<bool> {
    let mut ok = true;
    for value in interp.eval_program(source) {
        if value.is_error() {
            ok = false;
        }
        if !value.is_unit() {
            writeln!(output, "{value}")?;
        }
        value.release();
    }
    output.flush()?;
    Ok(ok)
}

/// Evaluate `source` as one program and print its result.
pub fn eval_source<W: Write>(
    interp: &Interpreter,
    source: &str,
    mut output: W,
) -> io::Result<bool> {
    let value = interp.eval_line(source);
    writeln!(output, "{value}")?;
    output.flush()?;
    let ok = !value.is_error();
    value.release();
    Ok(ok)
}

#[cfg(test)]
mod tests;
