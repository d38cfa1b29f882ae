pub mod error;
pub mod expressions;
pub mod statements;

use crate::ast::Identifier;
use crate::lexer::{Token, TokenKind, Tokenizer};
pub use error::{Expected, ParseError};
use statements::parse_program;

pub struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    pub fn new(mut tokenizer: Tokenizer<'a>) -> Result<Self, ParseError> {
        let current = tokenizer.next_token()?;
        Ok(Self { tokenizer, current })
    }

    /// Parses a whole program, consuming the parser.
    pub fn parse(mut self) -> Result<crate::ast::Program, ParseError> {
        parse_program(&mut self)
    }

    pub(crate) fn current_kind(&self) -> &TokenKind {
        &self.current.kind
    }

    /// Moves the lookahead one token forward and returns the token it was on.
    pub(crate) fn advance(&mut self) -> Result<Token, ParseError> {
        let next = self.tokenizer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    pub(crate) fn eat(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.current.kind == kind {
            self.advance()
        } else {
            Err(ParseError::unexpected_token(kind, self.current.clone()))
        }
    }

    pub(crate) fn parse_identifier(&mut self) -> Result<Identifier, ParseError> {
        let token = self.advance()?;
        match token.kind {
            TokenKind::Ident(name) => Ok(Identifier { name }),
            _ => Err(ParseError::unexpected_other(Expected::Identifier, token)),
        }
    }
}
