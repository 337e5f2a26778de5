/// Represents all errors that can occur while tokenizing.
///
/// Every variant carries the byte offset into the source where the problem
/// was detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A character that cannot start any token.
    #[error("Error at position {offset}: Unexpected character '{found}'.")]
    UnexpectedCharacter {
        /// The character encountered.
        found:  char,
        /// Byte offset of the character.
        offset: usize,
    },
    /// A numeric literal with a bare `.` or an exponent without digits.
    #[error("Error at position {offset}: Malformed number '{lexeme}'.")]
    MalformedNumber {
        /// The offending lexeme.
        lexeme: String,
        /// Byte offset where the literal starts.
        offset: usize,
    },
    /// An identifier that is neither a known variable nor a known function.
    #[error("Error at position {offset}: Unknown identifier '{name}'.")]
    UnknownIdentifier {
        /// The identifier.
        name:   String,
        /// Byte offset where the identifier starts.
        offset: usize,
    },
    /// A token that may not follow the token before it, such as `2 3` or `*5`.
    #[error("Error at position {offset}: Unexpected {found}.")]
    UnexpectedToken {
        /// Human-readable description of the token.
        found:  String,
        /// Byte offset of the token.
        offset: usize,
    },
    /// The expression ends with an operator, an opening delimiter or a comma.
    #[error("Error at position {offset}: Unexpected end of expression after {found}.")]
    UnexpectedEnd {
        /// Human-readable description of the last token.
        found:  String,
        /// Byte offset of the last token.
        offset: usize,
    },
    /// The source contains nothing but whitespace.
    #[error("Error at position {offset}: Empty expression.")]
    EmptyExpression {
        /// Length of the source.
        offset: usize,
    },
}

impl ParseError {
    /// Byte offset into the source where the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { offset, .. }
            | Self::MalformedNumber { offset, .. }
            | Self::UnknownIdentifier { offset, .. }
            | Self::UnexpectedToken { offset, .. }
            | Self::UnexpectedEnd { offset, .. }
            | Self::EmptyExpression { offset } => *offset,
        }
    }
}
