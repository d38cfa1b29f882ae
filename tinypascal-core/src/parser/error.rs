use thiserror::Error;

use crate::lexer::{LexError, Token, TokenKind};

#[derive(Debug, PartialEq, Error)]
pub enum ParseError {
    #[error("Expected {expected}, found {found}")]
    UnexpectedToken { expected: Expected, found: Token },
    #[error(transparent)]
    Lex(#[from] LexError),
}

#[derive(Debug, PartialEq)]
pub enum Expected {
    Token(TokenKind),
    Identifier,
    Expression,
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Expected::*;
        match self {
            Token(kind) => write!(f, "{}", kind),
            Identifier => write!(f, "an identifier"),
            Expression => write!(f, "an expression"),
        }
    }
}

impl ParseError {
    pub fn unexpected_token(expected: TokenKind, found: Token) -> ParseError {
        ParseError::UnexpectedToken {
            expected: Expected::Token(expected),
            found,
        }
    }

    pub fn unexpected_other(expected: Expected, found: Token) -> ParseError {
        ParseError::UnexpectedToken { expected, found }
    }
}
