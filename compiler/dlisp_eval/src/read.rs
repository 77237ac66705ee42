//! Folding the reader's node tree into values.
//!
//! Delimiter and comment nodes are dropped; a `Program` node becomes an
//! S-Expression of its top-level expressions, so a whole line evaluates as
//! one application.

use dlisp_reader::{Node, NodeKind};
use dlisp_stack::ensure_sufficient_stack;

use crate::errors::invalid_number_literal;
use crate::Value;

/// Convert `node` into a value. Returns `None` for delimiters and comments.
pub fn read(node: &Node) -> Option<Value> {
    let value = match node.kind {
        NodeKind::Number => read_number(&node.contents),
        NodeKind::String => Value::String(unescape(strip_quotes(&node.contents))),
        NodeKind::Symbol => Value::symbol(node.contents.as_str()),
        NodeKind::Program | NodeKind::SExpr => Value::SExpr(read_children(node)),
        NodeKind::QExpr => Value::QExpr(read_children(node)),
        NodeKind::Comment | NodeKind::Delimiter => return None,
    };
    Some(value)
}

fn read_children(node: &Node) -> Vec<Value> {
    ensure_sufficient_stack(|| node.expressions().filter_map(read).collect())
}

/// Out-of-range literals become error values, not panics.
fn read_number(text: &str) -> Value {
    text.parse::<i64>()
        .map_or_else(|_| Value::Error(invalid_number_literal(text)), Value::Number)
}

fn strip_quotes(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(text)
}

/// Resolve backslash escapes. Unknown escapes keep the escaped character.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('u') => unescape_unicode(&mut chars, &mut out),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Handle the `{hex}` tail of a `\u{hex}` escape; malformed escapes are kept verbatim.
fn unescape_unicode(chars: &mut std::str::Chars<'_>, out: &mut String) {
    let rest = chars.as_str();
    let decoded = rest
        .strip_prefix('{')
        .and_then(|body| body.split_once('}'))
        .and_then(|(hex, tail)| {
            let c = u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)?;
            Some((c, tail))
        });

    match decoded {
        Some((c, tail)) => {
            out.push(c);
            *chars = tail.chars();
        }
        None => out.push('u'),
    }
}
