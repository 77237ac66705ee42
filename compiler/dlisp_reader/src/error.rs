//! Reader errors.

use thiserror::Error;

use crate::Span;

/// Reasons the source text does not match the grammar.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected character `{found}` at {span}")]
    UnexpectedCharacter { found: String, span: Span },

    #[error("unterminated string literal starting at {span}")]
    UnterminatedString { span: Span },

    #[error("unclosed `{open}` opened at {span}")]
    UnclosedDelimiter { open: char, span: Span },

    #[error("unexpected `{found}` at {span}")]
    UnexpectedCloser { found: char, span: Span },

    #[error("expected `{expected}` to close `{open}` but found `{found}` at {span}")]
    MismatchedCloser {
        open: char,
        expected: char,
        found: char,
        span: Span,
    },
}
