use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_logical_or},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
///
/// # Example
/// ```
/// use gotolang::interpreter::{lexer::tokenize, parser::core::parse_expression};
///
/// let tokens = tokenize("1 + 2 * 3").unwrap();
/// let expr = parse_expression(&mut tokens.iter().peekable()).unwrap();
///
/// assert_eq!(expr.line_number(), 1);
/// ```
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_logical_or(tokens)
}

/// Consumes the statement terminator `;`.
///
/// Every statement form ends here, so a missing terminator is reported with
/// the line the statement started on.
///
/// # Errors
/// - `ExpectedSemicolon` if the next token is anything but `;` or the input
///   ends first.
pub(in crate::interpreter::parser) fn expect_semicolon<'a, I>(tokens: &mut Peekable<I>,
                                                              line: usize)
                                                              -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Semi, _)) => Ok(()),
        Some((_, line)) => Err(ParseError::ExpectedSemicolon { line: *line }),
        None => Err(ParseError::ExpectedSemicolon { line }),
    }
}
