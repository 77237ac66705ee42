//! d-lisp command-line front end.
//!
//! The binary is a thin argument dispatcher. The work lives here, writing to
//! caller-provided sinks so the REPL and script runner can be driven from
//! tests.

mod commands;
mod repl;

use std::sync::Once;

pub use commands::{eval_source, run_source};
pub use repl::{repl, EXIT_COMMAND, PROMPT};

static TRACING_INIT: Once = Once::new();

/// Initialize the tracing subscriber for diagnostic logging.
///
/// Only installs a subscriber when `RUST_LOG` is set, so a plain run pays
/// nothing. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        }
    });
}
