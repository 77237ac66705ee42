//! d-lisp CLI
//!
//! With no arguments, starts the REPL. Otherwise dispatches on the first
//! argument.

use std::io;

use dlisp_eval::Interpreter;

fn main() {
    dlisp::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        let interp = Interpreter::new();
        if let Err(e) = dlisp::repl(&interp, io::stdin().lock(), io::stdout().lock()) {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
        return;
    };

    match command.as_str() {
        "run" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: dlisp run <file>");
                std::process::exit(1);
            };
            let source = read_file(path);
            let interp = Interpreter::new();
            finish(dlisp::run_source(&interp, &source, io::stdout().lock()));
        }
        "eval" => {
            if args.len() < 3 {
                eprintln!("Usage: dlisp eval <expression>");
                std::process::exit(1);
            }
            // Shell words are rejoined so `dlisp eval + 1 2` works unquoted.
            let source = args[2..].join(" ");
            let interp = Interpreter::new();
            finish(dlisp::eval_source(&interp, &source, io::stdout().lock()));
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "--version" | "-V" => {
            println!("dlisp {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Exit non-zero if the command failed or produced an error value.
fn finish(result: io::Result<bool>) {
    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
                io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("d-lisp interpreter");
    println!();
    println!("Usage: dlisp [command] [args]");
    println!();
    println!("Commands:");
    println!("  (none)             Start the interactive REPL (`{}` to quit)", dlisp::EXIT_COMMAND);
    println!("  run <file>         Evaluate every expression in a file");
    println!("  eval <expression>  Evaluate one expression and print the result");
    println!("  help               Show this message");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=dlisp_eval=trace) for diagnostic output.");
}
