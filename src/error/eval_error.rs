/// Represents all errors that can occur while evaluating a token sequence.
///
/// Structural errors (unbalanced delimiters, too few operands) and semantic
/// errors (unresolved names, wrong argument counts, incompatible shapes) share
/// this type. Every variant carries a byte offset into the source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A `(` without its `)`, or a `)` without its `(`.
    #[error("Error at position {offset}: Unmatched parenthesis.")]
    UnmatchedParen {
        /// Offset of the unmatched delimiter.
        offset: usize,
    },
    /// A `[` without its `]`, or a `]` without its `[`.
    #[error("Error at position {offset}: Unmatched bracket.")]
    UnmatchedBracket {
        /// Offset of the unmatched delimiter.
        offset: usize,
    },
    /// A closing delimiter that does not match the innermost open one.
    #[error("Error at position {offset}: Expected '{expected}' but found '{found}'.")]
    MismatchedDelimiter {
        /// The delimiter that would close the innermost open group.
        expected: char,
        /// The delimiter actually found.
        found:    char,
        /// Offset of the closing delimiter.
        offset:   usize,
    },
    /// An identifier with no value in the environment.
    #[error("Error at position {offset}: Unknown identifier '{name}'.")]
    UnknownIdentifier {
        /// The identifier.
        name:   String,
        /// Offset of the identifier.
        offset: usize,
    },
    /// A variable used with call syntax.
    #[error("Error at position {offset}: '{name}' is not a function.")]
    NotAFunction {
        /// The variable name.
        name:   String,
        /// Offset of the identifier.
        offset: usize,
    },
    /// A function name that is not followed by an argument list.
    #[error("Error at position {offset}: Expected '(' after function '{name}'.")]
    MissingCallParen {
        /// The function name.
        name:   String,
        /// Offset just past the function name.
        offset: usize,
    },
    /// An operator found fewer operands than it needs.
    #[error("Error at position {offset}: Not enough operands for '{operator}'.")]
    StackUnderflow {
        /// The operator symbol.
        operator: String,
        /// Offset of the operator.
        offset:   usize,
    },
    /// A function called with the wrong number of arguments.
    #[error("Error at position {offset}: Function '{name}' takes {expected} argument(s), but {found} were supplied.")]
    ArityMismatch {
        /// The function name.
        name:     String,
        /// Description of the accepted argument count.
        expected: String,
        /// Number of arguments supplied.
        found:    usize,
        /// Offset of the function name.
        offset:   usize,
    },
    /// A comma outside of an argument list or vector literal.
    #[error("Error at position {offset}: ',' is only allowed in argument lists and vectors.")]
    MisplacedComma {
        /// Offset of the comma.
        offset: usize,
    },
    /// A vector literal containing another vector.
    #[error("Error at position {offset}: Vectors cannot contain vectors.")]
    NestedVector {
        /// Offset of the opening bracket.
        offset: usize,
    },
    /// Two vector operands of different lengths.
    #[error("Error at position {offset}: Cannot apply '{operator}' to vectors of lengths {left} and {right}.")]
    ShapeMismatch {
        /// The operator or function name.
        operator: String,
        /// Length of the left operand.
        left:     usize,
        /// Length of the right operand.
        right:    usize,
        /// Offset of the operator.
        offset:   usize,
    },
    /// A function rejected its arguments.
    #[error("Error at position {offset}: Invalid argument to '{name}': {details}.")]
    InvalidArgument {
        /// The function name.
        name:    String,
        /// Details reported by the function.
        details: String,
        /// Offset of the function name.
        offset:  usize,
    },
    /// The value stack did not end with exactly one value.
    #[error("Error at position {offset}: Expression left {count} values instead of one.")]
    LeftoverValues {
        /// Number of values left on the stack.
        count:  usize,
        /// Offset of the end of the input.
        offset: usize,
    },
}

impl EvalError {
    /// Byte offset into the source where the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnmatchedParen { offset }
            | Self::UnmatchedBracket { offset }
            | Self::MismatchedDelimiter { offset, .. }
            | Self::UnknownIdentifier { offset, .. }
            | Self::NotAFunction { offset, .. }
            | Self::MissingCallParen { offset, .. }
            | Self::StackUnderflow { offset, .. }
            | Self::ArityMismatch { offset, .. }
            | Self::MisplacedComma { offset }
            | Self::NestedVector { offset }
            | Self::ShapeMismatch { offset, .. }
            | Self::InvalidArgument { offset, .. }
            | Self::LeftoverValues { offset, .. } => *offset,
        }
    }
}
