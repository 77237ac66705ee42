//! Tokenizer built on logos.

use logos::Logos;

use crate::{ParseError, Span};

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // Wins over Symbol on equal-length matches, so `-5` is a number and `-` a symbol.
    #[regex(r"-?[0-9]+", priority = 3)]
    Number,

    #[regex(r#""([^"\\]|\\.)*""#)]
    String,

    #[regex(r"[a-zA-Z0-9_+\-*/\\=<>!&%]+")]
    Symbol,

    #[regex(r";[^\r\n]*")]
    Comment,
}

impl RawToken {
    /// Bracket character for delimiter tokens.
    pub(crate) fn bracket(self) -> Option<char> {
        match self {
            RawToken::LParen => Some('('),
            RawToken::RParen => Some(')'),
            RawToken::LBrace => Some('{'),
            RawToken::RBrace => Some('}'),
            _ => None,
        }
    }
}

/// A token with its source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Token<'src> {
    pub kind: RawToken,
    pub text: &'src str,
    pub span: Span,
}

/// Tokenize `source`, stopping at the first unrecognized input.
pub(crate) fn lex(source: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let text = logos.slice();

        match token_result {
            Ok(kind) => tokens.push(Token { kind, text, span }),
            Err(()) if text.starts_with('"') => {
                return Err(ParseError::UnterminatedString { span });
            }
            Err(()) => {
                return Err(ParseError::UnexpectedCharacter {
                    found: text.to_string(),
                    span,
                });
            }
        }
    }

    Ok(tokens)
}
