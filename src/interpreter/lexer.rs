use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Real literal tokens, such as `3.14`. The decimal point is what makes a
    /// numeric literal real rather than integer.
    #[regex(r"[0-9]+\.[0-9]+", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Text literal tokens: double-quoted, with a backslash escaping the
    /// character after it. The payload keeps escaped characters verbatim and
    /// strips only the surrounding quotes.
    #[regex(r#""([^"\\\n]|\\.)*""#, parse_text)]
    Text(String),
    /// `INPUT`
    #[token("INPUT")]
    Input,
    /// `OUTPUT`
    #[token("OUTPUT")]
    Output,
    /// `GOTO`
    #[token("GOTO")]
    Goto,
    /// `STR` (reserved type keyword, unused by the grammar)
    #[token("STR")]
    StrType,
    /// `INT` (reserved type keyword, unused by the grammar)
    #[token("INT")]
    IntType,
    /// `FLOAT` (reserved type keyword, unused by the grammar)
    #[token("FLOAT")]
    FloatType,
    /// `BOOL` (reserved type keyword, unused by the grammar)
    #[token("BOOL")]
    BoolType,
    /// Identifier tokens; variable names such as `x` or `count`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `# Comments, running to the end of the line.`
    #[regex(r"#[^\n\r]*", logos::skip)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `^`
    #[token("^")]
    Caret,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `&&`
    #[token("&&")]
    DoubleAmpersand,
    /// `||`
    #[token("||")]
    DoublePipe,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `;`
    #[token(";")]
    Semi,

    /// Newlines only bump the line counter; statements are delimited by `;`,
    /// so the token itself is skipped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    Newline,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a floating-point literal from the current token slice.
fn parse_real(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Strips the surrounding quotes from a text literal.
///
/// Escaped characters are kept verbatim, backslash included; the escape's
/// only lexical effect is that an escaped quote does not terminate the
/// literal.
fn parse_text(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Tokenizes a full source string into `(Token, line)` pairs.
///
/// Tokens are produced lazily by the lexer and collected together with the
/// line each one starts on, ready for the parser's lookahead. The first
/// unrecognized piece of input aborts tokenization.
///
/// # Parameters
/// - `source`: The raw source text.
///
/// # Returns
/// The token sequence in source order.
///
/// # Errors
/// Returns `ParseError::IllegalCharacter` identifying the offending text and
/// its line when the input contains a character that starts no token.
///
/// # Example
/// ```
/// use gotolang::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 1;").unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[0].0, Token::Identifier("x".to_string()));
///
/// assert!(tokenize("x = $;").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            return Err(ParseError::IllegalCharacter { character: slice.to_string(),
                                                      line:      lexer.extras.line, });
        }
    }

    Ok(tokens)
}
