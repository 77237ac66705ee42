//! Tagged node tree produced by the parser.

use std::fmt;

/// Byte range into the source text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Zero-width span at `pos`.
    #[inline]
    pub fn point(pos: usize) -> Self {
        Span {
            start: pos,
            end: pos,
        }
    }

    #[inline]
    pub fn from_range(range: std::ops::Range<usize>) -> Self {
        Span {
            start: range.start,
            end: range.end,
        }
    }

    /// Smallest span covering both `self` and `other`.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Grammar rule a node was produced by.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Whole input: `/^/ <expr>* /$/`.
    Program,
    /// `( ... )`
    SExpr,
    /// `{ ... }`
    QExpr,
    Number,
    /// Raw literal text including the surrounding quotes and escapes.
    String,
    Symbol,
    /// `;` line comment, text included.
    Comment,
    /// Bracket characters and the empty program anchors.
    Delimiter,
}

impl NodeKind {
    /// Grammar tag as written in the grammar above.
    pub fn tag(self) -> &'static str {
        match self {
            NodeKind::Program => "dlisp",
            NodeKind::SExpr => "sexpr",
            NodeKind::QExpr => "qexpr",
            NodeKind::Number => "number",
            NodeKind::String => "string",
            NodeKind::Symbol => "symbol",
            NodeKind::Comment => "comment",
            NodeKind::Delimiter => "regex",
        }
    }
}

/// One node of the parse tree.
///
/// Leaves carry their source text in `contents`; `Program`, `SExpr` and
/// `QExpr` carry their pieces in `children`, delimiters included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub contents: String,
    pub children: Vec<Node>,
    pub span: Span,
}

impl Node {
    pub fn leaf(kind: NodeKind, contents: impl Into<String>, span: Span) -> Self {
        Node {
            kind,
            contents: contents.into(),
            children: Vec::new(),
            span,
        }
    }

    pub fn branch(kind: NodeKind, children: Vec<Node>, span: Span) -> Self {
        Node {
            kind,
            contents: String::new(),
            children,
            span,
        }
    }

    /// Children that carry meaning: everything except delimiters and comments.
    pub fn expressions(&self) -> impl Iterator<Item = &Node> {
        self.children
            .iter()
            .filter(|child| !matches!(child.kind, NodeKind::Delimiter | NodeKind::Comment))
    }
}

// Nesting depth is bounded only by memory, so tear the tree down with an
// explicit worklist instead of recursive drop glue.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
