//! Recursive-descent parser over the token stream.

use dlisp_stack::ensure_sufficient_stack;

use crate::lexer::{lex, RawToken, Token};
use crate::{Node, NodeKind, ParseError, Span};

/// Parse `source` into a `Program` node.
///
/// The program's children start and end with empty `Delimiter` anchors;
/// every bracketed list keeps its brackets as `Delimiter` children.
pub fn parse(source: &str) -> Result<Node, ParseError> {
    let tokens = lex(source)?;
    let mut parser = Parser { tokens, pos: 0 };

    let mut children = vec![Node::leaf(NodeKind::Delimiter, "", Span::point(0))];
    while let Some(token) = parser.peek() {
        if let Some(found) = closer(token.kind) {
            return Err(ParseError::UnexpectedCloser {
                found,
                span: token.span,
            });
        }
        children.push(parser.expr()?);
    }
    children.push(Node::leaf(
        NodeKind::Delimiter,
        "",
        Span::point(source.len()),
    ));

    Ok(Node::branch(
        NodeKind::Program,
        children,
        Span::new(0, source.len()),
    ))
}

fn closer(kind: RawToken) -> Option<char> {
    match kind {
        RawToken::RParen | RawToken::RBrace => kind.bracket(),
        _ => None,
    }
}

struct Parser<'src> {
    tokens: Vec<Token<'src>>,
    pos: usize,
}

impl<'src> Parser<'src> {
    fn peek(&self) -> Option<Token<'src>> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token<'src>> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    /// Parse one expression. The caller has checked a token is available and
    /// is not a closing bracket.
    fn expr(&mut self) -> Result<Node, ParseError> {
        let Some(token) = self.bump() else {
            return Err(ParseError::UnexpectedCharacter {
                found: String::new(),
                span: Span::point(self.end_offset()),
            });
        };

        let leaf = |kind| Ok(Node::leaf(kind, token.text, token.span));
        match token.kind {
            RawToken::Number => leaf(NodeKind::Number),
            RawToken::String => leaf(NodeKind::String),
            RawToken::Symbol => leaf(NodeKind::Symbol),
            RawToken::Comment => leaf(NodeKind::Comment),
            RawToken::LParen => ensure_sufficient_stack(|| self.list(token, NodeKind::SExpr, ')')),
            RawToken::LBrace => ensure_sufficient_stack(|| self.list(token, NodeKind::QExpr, '}')),
            RawToken::RParen | RawToken::RBrace => Err(ParseError::UnexpectedCloser {
                found: token.kind.bracket().unwrap_or(')'),
                span: token.span,
            }),
        }
    }

    /// Parse list contents after `open` up to and including the matching closer.
    fn list(
        &mut self,
        open: Token<'src>,
        kind: NodeKind,
        expected: char,
    ) -> Result<Node, ParseError> {
        let open_char = open.kind.bracket().unwrap_or('(');
        let mut children = vec![Node::leaf(NodeKind::Delimiter, open.text, open.span)];

        loop {
            let Some(token) = self.peek() else {
                return Err(ParseError::UnclosedDelimiter {
                    open: open_char,
                    span: open.span,
                });
            };

            if let Some(found) = closer(token.kind) {
                self.pos += 1;
                if found != expected {
                    return Err(ParseError::MismatchedCloser {
                        open: open_char,
                        expected,
                        found,
                        span: token.span,
                    });
                }
                children.push(Node::leaf(NodeKind::Delimiter, token.text, token.span));
                return Ok(Node::branch(kind, children, open.span.merge(token.span)));
            }

            children.push(self.expr()?);
        }
    }

    fn end_offset(&self) -> usize {
        self.tokens.last().map_or(0, |t| t.span.end)
    }
}
