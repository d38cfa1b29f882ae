use crate::ast::{Expression, Identifier, InfixOperationKind, PrefixOperationKind};
use crate::lexer::TokenKind;
use crate::parser::error::Expected;
use crate::parser::{ParseError, Parser};

/// expr := term (('+' | '-') term)*
pub fn parse_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    let mut left = parse_term(parser)?;

    loop {
        let kind = match parser.current_kind() {
            TokenKind::Plus => InfixOperationKind::Plus,
            TokenKind::Minus => InfixOperationKind::Minus,
            _ => break,
        };
        parser.advance()?;

        let right = parse_term(parser)?;
        left = Expression::InfixOperation(kind, Box::new(left), Box::new(right));
    }

    Ok(left)
}

/// term := factor (('*' | '/') factor)*
fn parse_term(parser: &mut Parser) -> Result<Expression, ParseError> {
    let mut left = parse_factor(parser)?;

    loop {
        let kind = match parser.current_kind() {
            TokenKind::Asterisk => InfixOperationKind::Multiply,
            TokenKind::Slash => InfixOperationKind::Divide,
            _ => break,
        };
        parser.advance()?;

        let right = parse_factor(parser)?;
        left = Expression::InfixOperation(kind, Box::new(left), Box::new(right));
    }

    Ok(left)
}

/// factor := ('+' | '-') factor | integer | variable | '(' expr ')'
fn parse_factor(parser: &mut Parser) -> Result<Expression, ParseError> {
    let token = parser.advance()?;
    match token.kind {
        TokenKind::Plus => Ok(Expression::PrefixOperation(
            PrefixOperationKind::Plus,
            Box::new(parse_factor(parser)?),
        )),
        TokenKind::Minus => Ok(Expression::PrefixOperation(
            PrefixOperationKind::Minus,
            Box::new(parse_factor(parser)?),
        )),
        TokenKind::Int(value) => Ok(Expression::IntegerLiteral(value)),
        TokenKind::Ident(name) => Ok(Expression::Identifier(Identifier { name })),
        TokenKind::LParen => {
            let expression = parse_expression(parser)?;
            parser.eat(TokenKind::RParen)?;

            Ok(expression)
        }
        _ => Err(ParseError::unexpected_other(Expected::Expression, token)),
    }
}
