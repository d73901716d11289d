#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a token that cannot start or continue an expression.
    UnexpectedToken {
        /// The offending token text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input while an expression was still expected.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the list was opened.
        line: usize,
    },
    /// A closing brace `}` was expected but not found.
    ExpectedClosingBrace {
        /// The source line where the list was opened.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),

            Self::ExpectedClosingBrace { line } => write!(f,
                                                          "Error on line {line}: Expected closing brace '}}' but none found."),
        }
    }
}

impl std::error::Error for ParseError {}
