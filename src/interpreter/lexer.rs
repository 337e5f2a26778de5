use std::collections::HashSet;

use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::operator::{BinaryOperator, UnaryOperator},
};

/// Raw lexical unit recognized by the logos state machine.
///
/// Lexemes are context-free; whether a `+` is unary or binary, and whether an
/// identifier is allowed, is decided afterwards by [`tokenize`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"\s+")]
enum Lexeme {
    /// Numeric literals such as `2`, `2.`, `.5`, `2.5e-3`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    Number,
    /// A bare `.` or an exponent marker without digits, such as `2e` or `.5e+`.
    #[regex(r"[0-9]+(\.[0-9]*)?[eE][+-]?")]
    #[regex(r"\.[0-9]+[eE][+-]?")]
    #[token(".")]
    MalformedNumber,
    /// Identifiers; variable or function names such as `x`, `$rate` or `atan2`.
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Identifier,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
}

/// The classified content of a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A numeric literal.
    Number(f64),
    /// A variable or function name.
    Identifier(String),
    /// A prefix `+` or `-`.
    UnaryOp(UnaryOperator),
    /// An infix operator.
    BinaryOp(BinaryOperator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `,`
    Comma,
}

/// A token together with the byte offset where it starts in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What the token is.
    pub kind:   TokenKind,
    /// Byte offset of the first character of the token.
    pub offset: usize,
}

impl TokenKind {
    /// Whether this token completes an operand, i.e. a following `+` or `-`
    /// is binary.
    #[must_use]
    pub const fn ends_operand(&self) -> bool {
        matches!(self,
                 Self::Number(_) | Self::Identifier(_) | Self::RightParen | Self::RightBracket)
    }
}

/// Tokenizes `source`, accepting only identifiers contained in `allowed`.
///
/// Besides splitting the text, this pass
/// - classifies `+`/`-` as unary or binary from the preceding token alone,
/// - rejects identifiers missing from `allowed`,
/// - rejects adjacent operands (`2 3`), operators without a left operand
///   (`*5`) and input ending in an operator or open delimiter (`2+`).
///
/// # Errors
/// Returns a [`ParseError`] carrying the offset of the offending character.
///
/// # Example
/// ```
/// use std::collections::HashSet;
///
/// use shunt::interpreter::{
///     lexer::{TokenKind, tokenize},
///     operator::{BinaryOperator, UnaryOperator},
/// };
///
/// let allowed = HashSet::from(["x"]);
/// let tokens = tokenize("-x - 2.5e1", &allowed).unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::UnaryOp(UnaryOperator::Minus),
///                 TokenKind::Identifier("x".to_string()),
///                 TokenKind::BinaryOp(BinaryOperator::Sub),
///                 TokenKind::Number(25.0)]);
/// ```
pub fn tokenize(source: &str, allowed: &HashSet<&str>) -> Result<Vec<Token>, ParseError> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let offset = lexer.span().start;
        let slice = lexer.slice();

        let Ok(lexeme) = lexeme else {
            return Err(ParseError::UnexpectedCharacter { found: slice.chars().next().unwrap_or('\0'),
                                                         offset });
        };

        let previous = tokens.last().map(|t| &t.kind);
        let kind = match lexeme {
            Lexeme::Number => {
                let value = slice.parse().map_err(|_| {
                                              ParseError::MalformedNumber { lexeme: slice.to_string(),
                                                                            offset }
                                          })?;
                TokenKind::Number(value)
            },
            Lexeme::MalformedNumber => {
                return Err(ParseError::MalformedNumber { lexeme: slice.to_string(),
                                                         offset });
            },
            Lexeme::Identifier => {
                if !allowed.contains(slice) {
                    return Err(ParseError::UnknownIdentifier { name: slice.to_string(),
                                                               offset });
                }
                TokenKind::Identifier(slice.to_string())
            },
            Lexeme::Plus | Lexeme::Minus => classify_sign(lexeme == Lexeme::Plus, previous),
            Lexeme::Star => TokenKind::BinaryOp(BinaryOperator::Mul),
            Lexeme::DoubleStar | Lexeme::Caret => TokenKind::BinaryOp(BinaryOperator::Pow),
            Lexeme::Slash => TokenKind::BinaryOp(BinaryOperator::Div),
            Lexeme::Equals => TokenKind::BinaryOp(BinaryOperator::Equal),
            Lexeme::LParen => TokenKind::LeftParen,
            Lexeme::RParen => TokenKind::RightParen,
            Lexeme::LBracket => TokenKind::LeftBracket,
            Lexeme::RBracket => TokenKind::RightBracket,
            Lexeme::Comma => TokenKind::Comma,
        };

        check_adjacency(&tokens, &kind, offset)?;
        tokens.push(Token { kind, offset });
    }

    check_end(&tokens, source.len())?;

    Ok(tokens)
}

/// Whether `name` is spelled like an identifier, `[a-zA-Z_$][a-zA-Z0-9_$]*`.
///
/// # Example
/// ```
/// use shunt::interpreter::lexer::is_identifier;
///
/// assert!(is_identifier("$rate"));
/// assert!(!is_identifier("2x"));
/// assert!(!is_identifier(""));
/// ```
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next()
         .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// A sign is binary exactly when it follows a completed operand.
fn classify_sign(plus: bool, previous: Option<&TokenKind>) -> TokenKind {
    match (previous.is_some_and(TokenKind::ends_operand), plus) {
        (true, true) => TokenKind::BinaryOp(BinaryOperator::Add),
        (true, false) => TokenKind::BinaryOp(BinaryOperator::Sub),
        (false, true) => TokenKind::UnaryOp(UnaryOperator::Plus),
        (false, false) => TokenKind::UnaryOp(UnaryOperator::Minus),
    }
}

/// Validates that `next` may directly follow the tokens scanned so far.
///
/// After an operand only an infix operator, a closing delimiter or a comma may
/// follow; `(` is accepted after an identifier to open a call. Everywhere else
/// an operand (or a prefix operator, or an opening delimiter) is required,
/// with the exception of the empty argument list in `f()`.
fn check_adjacency(tokens: &[Token], next: &TokenKind, offset: usize) -> Result<(), ParseError> {
    let previous = tokens.last().map(|t| &t.kind);

    let allowed = if previous.is_some_and(TokenKind::ends_operand) {
        match next {
            TokenKind::BinaryOp(_)
            | TokenKind::RightParen
            | TokenKind::RightBracket
            | TokenKind::Comma => true,
            TokenKind::LeftParen => matches!(previous, Some(TokenKind::Identifier(_))),
            TokenKind::Number(_)
            | TokenKind::Identifier(_)
            | TokenKind::UnaryOp(_)
            | TokenKind::LeftBracket => false,
        }
    } else {
        match next {
            TokenKind::BinaryOp(_) | TokenKind::RightBracket | TokenKind::Comma => false,
            TokenKind::RightParen => opens_empty_call(tokens),
            _ => true,
        }
    };

    if allowed {
        Ok(())
    } else {
        Err(ParseError::UnexpectedToken { found: next.to_string(),
                                          offset })
    }
}

/// Whether the scanned tokens end in `identifier (`.
fn opens_empty_call(tokens: &[Token]) -> bool {
    matches!(tokens,
             [.., Token { kind: TokenKind::Identifier(_), .. }, Token { kind: TokenKind::LeftParen, .. }])
}

/// Rejects empty input and input ending where an operand is still expected.
fn check_end(tokens: &[Token], len: usize) -> Result<(), ParseError> {
    let Some(last) = tokens.last() else {
        return Err(ParseError::EmptyExpression { offset: len });
    };

    match last.kind {
        TokenKind::UnaryOp(_)
        | TokenKind::BinaryOp(_)
        | TokenKind::LeftParen
        | TokenKind::LeftBracket
        | TokenKind::Comma => Err(ParseError::UnexpectedEnd { found:  last.kind.to_string(),
                                                              offset: last.offset, }),
        _ => Ok(()),
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number {n}"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::UnaryOp(op) => {
                let symbol = match op {
                    UnaryOperator::Plus => '+',
                    UnaryOperator::Minus => '-',
                };
                write!(f, "'{symbol}'")
            },
            Self::BinaryOp(op) => write!(f, "'{op}'"),
            Self::LeftParen => write!(f, "'('"),
            Self::RightParen => write!(f, "')'"),
            Self::LeftBracket => write!(f, "'['"),
            Self::RightBracket => write!(f, "']'"),
            Self::Comma => write!(f, "','"),
        }
    }
}
