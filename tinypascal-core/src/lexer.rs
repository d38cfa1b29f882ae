use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TokenKind {
    Ident(Rc<str>),
    Int(i64),

    // Operators
    Plus,
    Minus,
    Asterisk,
    Slash,
    Assign,

    SemiColon,
    Dot,
    LParen,
    RParen,

    // Keywords
    Begin,
    End,

    Eof,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, PartialEq, Clone, Error)]
pub enum LexError {
    #[error("Invalid character {ch:?} at byte {at}")]
    InvalidCharacter { ch: char, at: usize },
    #[error("Integer literal {literal} out of range at byte {at}")]
    IntegerOutOfRange { literal: Rc<str>, at: usize },
}

fn keywords(ident: &str) -> Option<TokenKind> {
    match ident {
        "BEGIN" => Some(TokenKind::Begin),
        "END" => Some(TokenKind::End),
        _ => None,
    }
}

#[derive(Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    iter: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        let iter = input.char_indices().peekable();
        Self { input, iter }
    }

    fn is_letter(ch: char) -> bool {
        ch.is_ascii_alphabetic()
    }

    fn read_identifier(&mut self, start: usize) -> Token {
        while self
            .iter
            .next_if(|(_, ch)| ch.is_ascii_alphanumeric())
            .is_some()
        {}

        let end = self.next_idx();
        let ident = &self.input[start..end];
        Token {
            kind: keywords(ident).unwrap_or_else(|| TokenKind::Ident(ident.into())),
            start,
            end,
        }
    }

    fn read_number(&mut self, start: usize) -> Result<Token, LexError> {
        while self.iter.next_if(|(_, ch)| ch.is_ascii_digit()).is_some() {}

        let end = self.next_idx();
        let literal = &self.input[start..end];

        match literal.parse() {
            Ok(value) => Ok(Token {
                kind: TokenKind::Int(value),
                start,
                end,
            }),
            Err(_) => Err(LexError::IntegerOutOfRange {
                literal: literal.into(),
                at: start,
            }),
        }
    }

    fn next_idx(&mut self) -> usize {
        self.iter
            .peek()
            .map(|(idx, _)| *idx)
            .unwrap_or(self.input.len())
    }

    /// Returns the next token of the input. Once the input is exhausted this
    /// returns an `Eof` token, and keeps returning it on every further call.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        while self.iter.next_if(|(_, ch)| ch.is_whitespace()).is_some() {}

        let Some((idx, ch)) = self.iter.next() else {
            let at = self.input.len();
            return Ok(Token {
                kind: TokenKind::Eof,
                start: at,
                end: at,
            });
        };

        let kind = match ch {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Asterisk,
            '/' => TokenKind::Slash,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ';' => TokenKind::SemiColon,
            '.' => TokenKind::Dot,
            ':' => {
                // ':' only occurs as part of ':='
                if self.iter.next_if(|(_, ch)| *ch == '=').is_some() {
                    TokenKind::Assign
                } else {
                    return Err(LexError::InvalidCharacter { ch, at: idx });
                }
            }
            c if Self::is_letter(c) => return Ok(self.read_identifier(idx)),
            c if c.is_ascii_digit() => return self.read_number(idx),
            _ => return Err(LexError::InvalidCharacter { ch, at: idx }),
        };

        Ok(Token {
            kind,
            start: idx,
            end: self.next_idx(),
        })
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Token {
                kind: TokenKind::Eof,
                ..
            }) => None,
            other => Some(other),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use TokenKind::*;
        match self {
            Ident(name) => write!(f, "identifier {:?}", name),
            Int(value) => write!(f, "integer {}", value),
            Plus => write!(f, "'+'"),
            Minus => write!(f, "'-'"),
            Asterisk => write!(f, "'*'"),
            Slash => write!(f, "'/'"),
            Assign => write!(f, "':='"),
            SemiColon => write!(f, "';'"),
            Dot => write!(f, "'.'"),
            LParen => write!(f, "'('"),
            RParen => write!(f, "')'"),
            Begin => write!(f, "'BEGIN'"),
            End => write!(f, "'END'"),
            Eof => write!(f, "end of input"),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "{}", self.kind),
            _ => write!(f, "{} at byte {}", self.kind, self.start),
        }
    }
}
