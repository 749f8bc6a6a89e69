#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer met a character that starts no token.
    IllegalCharacter {
        /// The offending piece of source text.
        character: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A statement terminator `;` was expected but not found.
    ExpectedSemicolon {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An identifier was expected but not found.
    ExpectedIdentifier {
        /// The token found instead.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter { character, line } => {
                write!(f, "Error on line {line}: Illegal character '{character}'.")
            },

            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),

            Self::ExpectedSemicolon { line } => write!(f,
                                                       "Error on line {line}: Expected ';' at the end of the statement."),

            Self::ExpectedIdentifier { token, line } => {
                write!(f, "Error on line {line}: Expected identifier, found {token}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
