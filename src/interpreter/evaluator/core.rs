use log::trace;

use crate::{
    error::EvalError,
    interpreter::{
        environment::Environment,
        evaluator::function::core::Function,
        lexer::{Token, TokenKind},
        operator::Operator,
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// What an open delimiter on the operator stack is collecting.
#[derive(Debug, Clone, Copy)]
enum FrameKind<'t, 'e> {
    /// `( ... )` around a single subexpression.
    Group,
    /// `name( ... )`, collecting comma-separated arguments.
    Call {
        name:     &'t str,
        function: &'e Function,
    },
    /// `[ ... ]`, collecting comma-separated elements.
    Vector,
}

/// A barrier on the operator stack.
///
/// Reductions never cross a frame, and the values above `base` on the value
/// stack belong to it.
#[derive(Debug, Clone, Copy)]
struct Frame<'t, 'e> {
    kind:   FrameKind<'t, 'e>,
    offset: usize,
    base:   usize,
}

/// An entry of the operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending<'t, 'e> {
    Operator { op: Operator, offset: usize },
    Frame(Frame<'t, 'e>),
}

impl FrameKind<'_, '_> {
    const fn closer(self) -> char {
        match self {
            Self::Group | Self::Call { .. } => ')',
            Self::Vector => ']',
        }
    }
}

/// Evaluates a token sequence with two stacks, applying every operator as
/// soon as nothing pending can bind tighter.
///
/// An evaluator is consumed by [`Evaluator::run`]; each evaluation starts from
/// empty stacks.
///
/// # Example
/// ```
/// use std::collections::HashSet;
///
/// use shunt::{
///     Environment, Value,
///     interpreter::{evaluator::core::Evaluator, lexer::tokenize},
/// };
///
/// let env = Environment::new().with_variable("x", 4.0);
/// let tokens = tokenize("2 + 3 * x", &env.identifiers()).unwrap();
///
/// let value = Evaluator::new(&tokens, &env).run().unwrap();
/// assert_eq!(value, Value::Scalar(14.0));
/// ```
#[derive(Debug)]
pub struct Evaluator<'t, 'e> {
    tokens:      std::slice::Iter<'t, Token>,
    pushed_back: Option<&'t Token>,
    operators:   Vec<Pending<'t, 'e>>,
    values:      Vec<Value>,
    env:         &'e Environment,
    end:         usize,
}

impl<'t, 'e> Evaluator<'t, 'e> {
    /// Creates an evaluator over `tokens` resolving names in `env`.
    #[must_use]
    pub fn new(tokens: &'t [Token], env: &'e Environment) -> Self {
        let end = tokens.last().map_or(0, |t| t.offset);

        Self { tokens: tokens.iter(),
               pushed_back: None,
               operators: Vec::new(),
               values: Vec::new(),
               env,
               end }
    }

    /// Runs the evaluation to completion.
    ///
    /// # Errors
    /// Returns an [`EvalError`] for unbalanced delimiters, unresolved names,
    /// wrong argument counts, incompatible vector shapes and operators without
    /// enough operands.
    pub fn run(mut self) -> EvalResult<Value> {
        while let Some(token) = self.next_token() {
            match &token.kind {
                TokenKind::Number(n) => self.values.push(Value::Scalar(*n)),
                TokenKind::Identifier(name) => self.identifier(name, token.offset)?,
                TokenKind::LeftParen => self.open(FrameKind::Group, token.offset),
                TokenKind::LeftBracket => self.open(FrameKind::Vector, token.offset),
                TokenKind::RightParen => self.close(')', token.offset)?,
                TokenKind::RightBracket => self.close(']', token.offset)?,
                TokenKind::Comma => self.comma(token.offset)?,
                TokenKind::UnaryOp(op) => self.operator((*op).into(), token)?,
                TokenKind::BinaryOp(op) => self.operator((*op).into(), token)?,
            }
        }

        self.finish()
    }

    /// Takes the pushed-back token if there is one, otherwise the next input
    /// token.
    fn next_token(&mut self) -> Option<&'t Token> {
        self.pushed_back.take().or_else(|| self.tokens.next())
    }

    fn peek_token(&self) -> Option<&'t Token> {
        self.pushed_back.or_else(|| self.tokens.as_slice().first())
    }

    /// Returns `token` to the input so the loop sees it again once the
    /// operator stack has changed.
    fn push_back(&mut self, token: &'t Token) {
        debug_assert!(self.pushed_back.is_none(), "pushback buffer holds one token");
        self.pushed_back = Some(token);
    }

    /// Resolves an identifier to a variable value or opens a call frame.
    ///
    /// Variables shadow functions of the same name.
    fn identifier(&mut self, name: &'t str, offset: usize) -> EvalResult<()> {
        if let Some(value) = self.env.variable(name) {
            if self.peek_token()
                   .is_some_and(|t| matches!(t.kind, TokenKind::LeftParen))
            {
                return Err(EvalError::NotAFunction { name: name.to_string(),
                                                     offset });
            }
            self.values.push(value.clone());
            return Ok(());
        }

        let Some(function) = self.env.function(name) else {
            return Err(EvalError::UnknownIdentifier { name: name.to_string(),
                                                      offset });
        };

        match self.next_token() {
            Some(Token { kind: TokenKind::LeftParen,
                         .. }) => {
                self.open(FrameKind::Call { name, function }, offset);
                Ok(())
            },
            _ => Err(EvalError::MissingCallParen { name:   name.to_string(),
                                                   offset: offset + name.len(), }),
        }
    }

    fn open(&mut self, kind: FrameKind<'t, 'e>, offset: usize) {
        self.operators.push(Pending::Frame(Frame { kind,
                                                   offset,
                                                   base: self.values.len() }));
    }

    /// Shifts `op` or reduces the operator below it.
    ///
    /// When the pending operator binds at least as tightly, it is applied and
    /// `token` is pushed back to be compared against the new top.
    fn operator(&mut self, op: Operator, token: &'t Token) -> EvalResult<()> {
        if let Some(Pending::Operator { op: top, offset }) = self.operators.last()
           && !op.shifts_over(*top)
        {
            let (top, offset) = (*top, *offset);
            trace!("reduce {top} before {op}");

            self.push_back(token);
            self.operators.pop();
            return self.apply(top, offset);
        }

        trace!("shift {op}");
        self.operators.push(Pending::Operator { op,
                                                offset: token.offset });
        Ok(())
    }

    /// Applies pending operators down to the innermost frame and pops it.
    ///
    /// Returns `None` when the operator stack runs out without a frame.
    fn reduce_to_frame(&mut self) -> EvalResult<Option<Frame<'t, 'e>>> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Operator { op, offset } => self.apply(op, offset)?,
                Pending::Frame(frame) => return Ok(Some(frame)),
            }
        }
        Ok(None)
    }

    fn close(&mut self, closer: char, offset: usize) -> EvalResult<()> {
        let Some(frame) = self.reduce_to_frame()? else {
            return Err(if closer == ']' {
                           EvalError::UnmatchedBracket { offset }
                       } else {
                           EvalError::UnmatchedParen { offset }
                       });
        };

        if frame.kind.closer() != closer {
            return Err(EvalError::MismatchedDelimiter { expected: frame.kind.closer(),
                                                        found: closer,
                                                        offset });
        }

        match frame.kind {
            FrameKind::Group => {},
            FrameKind::Call { name, function } => {
                let args = self.values.split_off(frame.base);
                trace!("call {name} with {} argument(s)", args.len());
                self.values.push(function.call(name, &args, frame.offset)?);
            },
            FrameKind::Vector => {
                let items = self.values.split_off(frame.base);
                if items.iter().any(Value::is_vector) {
                    return Err(EvalError::NestedVector { offset: frame.offset });
                }
                let elements = items.iter().flat_map(Value::elements).copied().collect();
                self.values.push(Value::Vector(elements));
            },
        }
        Ok(())
    }

    /// Completes the current argument or element; the enclosing frame stays
    /// open.
    fn comma(&mut self, offset: usize) -> EvalResult<()> {
        match self.reduce_to_frame()? {
            Some(frame @ Frame { kind: FrameKind::Call { .. } | FrameKind::Vector,
                                 .. }) => {
                self.operators.push(Pending::Frame(frame));
                Ok(())
            },
            _ => Err(EvalError::MisplacedComma { offset }),
        }
    }

    /// Drains the operator stack after the last token and returns the single
    /// remaining value.
    fn finish(mut self) -> EvalResult<Value> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Operator { op, offset } => self.apply(op, offset)?,
                Pending::Frame(Frame { kind: FrameKind::Vector,
                                       offset,
                                       .. }) => return Err(EvalError::UnmatchedBracket { offset }),
                Pending::Frame(Frame { offset, .. }) => {
                    return Err(EvalError::UnmatchedParen { offset });
                },
            }
        }

        match self.values.len() {
            0 => Err(EvalError::StackUnderflow { operator: "end of input".to_string(),
                                                 offset:   self.end, }),
            1 => Ok(self.values.remove(0)),
            count => Err(EvalError::LeftoverValues { count,
                                                     offset: self.end }),
        }
    }

    /// Number of values above the innermost frame.
    fn available(&self) -> usize {
        let base = self.operators
                       .iter()
                       .rev()
                       .find_map(|p| match p {
                           Pending::Frame(frame) => Some(frame.base),
                           Pending::Operator { .. } => None,
                       })
                       .unwrap_or(0);
        self.values.len() - base
    }

    /// Pops the operands of `op`, applies it and pushes the result.
    fn apply(&mut self, op: Operator, offset: usize) -> EvalResult<()> {
        if self.available() < op.arity() {
            return Err(EvalError::StackUnderflow { operator: op.to_string(),
                                                   offset });
        }

        let result = match op {
            Operator::Unary(unary) => {
                let x = self.pop_operand(op, offset)?;
                Self::apply_unary(unary, &x)
            },
            Operator::Binary(binary) => {
                let y = self.pop_operand(op, offset)?;
                let x = self.pop_operand(op, offset)?;
                Self::apply_binary(binary, &x, &y, self.env.tolerance(), offset)?
            },
        };

        trace!("apply {op} -> {result}");
        self.values.push(result);
        Ok(())
    }

    fn pop_operand(&mut self, op: Operator, offset: usize) -> EvalResult<Value> {
        self.values.pop().ok_or_else(|| EvalError::StackUnderflow { operator: op.to_string(),
                                                                    offset })
    }
}

/// Evaluates an already tokenized expression against `env`.
///
/// # Errors
/// Returns an [`EvalError`] describing the first structural or semantic
/// problem encountered.
///
/// # Example
/// ```
/// use std::collections::HashSet;
///
/// use shunt::{Environment, Value, evaluate_tokens, tokenize};
///
/// let tokens = tokenize("2^3^2", &HashSet::new()).unwrap();
/// let value = evaluate_tokens(&tokens, &Environment::new()).unwrap();
///
/// assert_eq!(value, Value::Scalar(512.0));
/// ```
pub fn evaluate_tokens(tokens: &[Token], env: &Environment) -> EvalResult<Value> {
    Evaluator::new(tokens, env).run()
}
