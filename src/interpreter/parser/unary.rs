use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `+`  (numeric identity)
/// - `-`  (numeric negation)
/// - `!`  (logical not, reserved)
///
/// Unary operators are right-associative, so an input like `-+x` is parsed as
/// `-( +x )`. If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-" | "!") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Plus, line)) => Some((UnaryOperator::Plus, *line)),
        Some((Token::Minus, line)) => Some((UnaryOperator::Negate, *line)),
        Some((Token::Bang, line)) => Some((UnaryOperator::Not, *line)),
        _ => None,
    };

    if let Some((op, line)) = op {
        tokens.next();
        let expr = parse_unary(tokens)?;
        return Ok(Expr::UnaryOp { op,
                                  expr: Box::new(expr),
                                  line });
    }

    parse_primary(tokens)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - integer, real and text literals
/// - variable references
/// - parenthesized expressions
///
/// This function does not handle unary operators; it dispatches on the
/// leading token and reports anything else (including the reserved type
/// keywords) as unexpected.
///
/// Grammar (simplified):
/// ```text
///     primary := INTEGER | REAL | STRING
///              | IDENTIFIER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Integer(..) | Token::Real(..) | Token::Text(..), _) => parse_literal(tokens),
        (Token::Identifier(_), _) => parse_variable(tokens),
        (Token::LParen, _) => parse_grouping(tokens),
        (tok, line) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                         line:  *line, }),
    }
}

/// Parses a numeric or text literal.
///
/// The lexer already decided integer versus real by the presence of a decimal
/// point, so this function only wraps the payload in a literal node.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (tok, line) = tokens.next().unwrap();
    match tok {
        Token::Integer(n) => Ok(Expr::Literal { value: (*n).into(),
                                                line:  *line, }),
        Token::Real(r) => Ok(Expr::Literal { value: (*r).into(),
                                             line:  *line, }),
        Token::Text(s) => Ok(Expr::Literal { value: s.as_str().into(),
                                             line:  *line, }),
        _ => unreachable!(),
    }
}

/// Parses a variable reference.
fn parse_variable<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Identifier(name), line)) => Ok(Expr::Variable { name: name.clone(),
                                                                     line: *line, }),
        _ => unreachable!(),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields `ParseError::ExpectedClosingParen`.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { line }),
    }
}
