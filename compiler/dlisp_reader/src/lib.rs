//! Reader for d-lisp source text.
//!
//! Turns text into a tree of tagged [`Node`]s. The tree mirrors the grammar
//! one-to-one: brackets and the program anchors survive as
//! [`NodeKind::Delimiter`] children and `;` comments as [`NodeKind::Comment`]
//! children. Dropping those and turning the rest into runtime values is the
//! evaluator's job.
//!
//! ```text
//! number  : /-?[0-9]+/ ;
//! string  : /"(\\.|[^"])*"/ ;
//! symbol  : /[a-zA-Z0-9_+\-*\/\\=<>!&%]+/ ;
//! comment : /;[^\r\n]*/ ;
//! sexpr   : '(' <expr>* ')' ;
//! qexpr   : '{' <expr>* '}' ;
//! expr    : <number> | <string> | <symbol> | <comment> | <sexpr> | <qexpr> ;
//! dlisp   : /^/ <expr>* /$/ ;
//! ```

mod error;
mod lexer;
mod node;
mod parser;

pub use error::ParseError;
pub use node::{Node, NodeKind, Span};
pub use parser::parse;
