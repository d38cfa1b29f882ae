use crate::ast::{BlockStatement, Statement};
use crate::lexer::TokenKind;
use crate::parser::expressions::parse_expression;
use crate::parser::{ParseError, Parser};

/// program := compound_statement '.'
pub fn parse_program(parser: &mut Parser) -> Result<crate::ast::Program, ParseError> {
    let block = parse_compound_statement(parser)?;
    parser.eat(TokenKind::Dot)?;
    parser.eat(TokenKind::Eof)?;

    Ok(crate::ast::Program { block })
}

/// compound_statement := 'BEGIN' statement_list 'END'
fn parse_compound_statement(parser: &mut Parser) -> Result<BlockStatement, ParseError> {
    parser.eat(TokenKind::Begin)?;
    let statements = parse_statement_list(parser)?;
    parser.eat(TokenKind::End)?;

    Ok(BlockStatement { statements })
}

/// statement_list := statement (';' statement)*
fn parse_statement_list(parser: &mut Parser) -> Result<Vec<Statement>, ParseError> {
    let mut statements = vec![parse_statement(parser)?];

    while parser.current_kind() == &TokenKind::SemiColon {
        parser.advance()?;
        statements.push(parse_statement(parser)?);
    }

    Ok(statements)
}

/// statement := compound_statement | assignment_statement | empty
fn parse_statement(parser: &mut Parser) -> Result<Statement, ParseError> {
    match parser.current_kind() {
        TokenKind::Begin => Ok(Statement::Compound(parse_compound_statement(parser)?)),
        TokenKind::Ident(_) => Ok(Statement::Assign(parse_assign_statement(parser)?)),
        _ => Ok(Statement::Empty),
    }
}

/// assignment_statement := variable ':=' expr
fn parse_assign_statement(parser: &mut Parser) -> Result<crate::ast::AssignStatement, ParseError> {
    let identifier = parser.parse_identifier()?;
    parser.eat(TokenKind::Assign)?;
    let value = parse_expression(parser)?;

    Ok(crate::ast::AssignStatement { identifier, value })
}
