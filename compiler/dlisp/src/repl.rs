//! Interactive read-eval-print loop.

use std::io::{self, BufRead, Write};

use dlisp_eval::Interpreter;

pub const PROMPT: &str = "d-lisp> ";

/// Input line that ends the session.
pub const EXIT_COMMAND: &str = "exit";

const FAREWELL: &str = "stopping d-lisp interpreter ...";

/// Run the REPL until `exit` or end of input.
///
/// Each line is one program evaluated as a single S-Expression in the
/// interpreter's root environment, so definitions carry over between lines.
/// Blank lines are skipped.
pub fn repl<R: BufRead, W: Write>(
    interp: &Interpreter,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // EOF leaves the cursor after the prompt.
            writeln!(output)?;
            break;
        }

        let source = line.trim();
        if source == EXIT_COMMAND {
            break;
        }
        if source.is_empty() {
            continue;
        }

        let result = interp.eval_line(source);
        if result.is_error() {
            tracing::debug!(%source, "line evaluated to an error");
        }
        writeln!(output, "{result}")?;
        result.release();
    }

    writeln!(output, "{FAREWELL}")?;
    output.flush()
}
