use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, expect_semicolon, parse_expression},
    },
};

/// Parses a whole program: every statement up to the end of the token stream.
///
/// Statements land in the returned sequence in source order; a statement's
/// position in that sequence is the index that `GOTO` targets address. Blank
/// statements (bare `;`) occupy an index like any other.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// The ordered statement sequence.
///
/// # Errors
/// Propagates the first `ParseError` from any malformed statement; nothing is
/// silently skipped.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut program = Vec::new();

    while tokens.peek().is_some() {
        program.push(parse_statement(tokens)?);
    }

    Ok(program)
}

/// Parses a single statement, consuming its terminating `;`.
///
/// A statement is one of:
/// - `IDENTIFIER = expression ;` (assignment)
/// - `INPUT IDENTIFIER ;`
/// - `OUTPUT expression ;`
/// - `GOTO expression ;`
/// - a bare `;` (empty statement)
///
/// The leading token decides the form; anything else is an unexpected-token
/// error rather than a silent no-op.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Semi, _)) => {
            tokens.next();
            Ok(Statement::NoOp)
        },

        Some((Token::Input, line)) => {
            let line = *line;
            tokens.next();

            let name = parse_identifier(tokens, line)?;
            expect_semicolon(tokens, line)?;

            Ok(Statement::Input { name, line })
        },

        Some((Token::Output, line)) => {
            let line = *line;
            tokens.next();

            let expr = parse_expression(tokens)?;
            expect_semicolon(tokens, line)?;

            Ok(Statement::Output { expr, line })
        },

        Some((Token::Goto, line)) => {
            let line = *line;
            tokens.next();

            let target = parse_expression(tokens)?;
            expect_semicolon(tokens, line)?;

            Ok(Statement::Goto { target, line })
        },

        Some((Token::Identifier(_), _)) => parse_assignment(tokens),

        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                               line:  *line, }),

        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses an assignment statement: `<identifier> = <expression> ;`.
///
/// An identifier in statement position can only begin an assignment, so a
/// missing `=` is reported against the token found in its place.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = match tokens.next() {
        Some((Token::Identifier(n), line)) => (n.clone(), *line),
        _ => unreachable!(),
    };

    match tokens.next() {
        Some((Token::Equals, _)) => {},
        Some((tok, l)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected '=', found {tok:?}"),
                                                     line:  *l, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { line });
        },
    }

    let value = parse_expression(tokens)?;
    expect_semicolon(tokens, line)?;

    Ok(Statement::Assignment { name, value, line })
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`.
fn parse_identifier<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, line)) => Err(ParseError::ExpectedIdentifier { token: format!("{tok:?}"),
                                                                  line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}
