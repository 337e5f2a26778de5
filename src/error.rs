/// Tokenizer errors.
///
/// Defines all error types that can occur while turning source text into
/// tokens: unexpected characters, malformed numbers, unknown identifiers,
/// invalid token adjacency and empty input.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a token
/// sequence, such as unbalanced delimiters, missing operands, unresolved names
/// and wrong argument counts.
pub mod eval_error;
/// Caret diagnostics for reporting an error position within the source.
pub mod diagnostic;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

/// Any error produced by [`crate::evaluate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The source could not be tokenized.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The tokens could not be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    /// Byte offset into the source where the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Parse(e) => e.offset(),
            Self::Eval(e) => e.offset(),
        }
    }

    /// Renders the error message followed by a caret diagnostic.
    ///
    /// # Example
    /// ```
    /// use shunt::{Environment, evaluate};
    ///
    /// let source = "2 + )";
    /// let err = evaluate(source, &Environment::new()).unwrap_err();
    ///
    /// assert!(err.render(source).ends_with("2 + )\n    ▲\n────╯"));
    /// ```
    #[must_use]
    pub fn render(&self, source: &str) -> String {
        format!("{self}\n\n{}", diagnostic::render_caret(source, self.offset()))
    }
}
