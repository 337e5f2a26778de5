/// Represents a binary (infix) operator.
///
/// Both `^` and `**` lex to [`BinaryOperator::Pow`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^` or `**`)
    Pow,
    /// Approximate equality (`=`), yielding `1` or `0`.
    Equal,
}

/// Represents a unary (prefix) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Unary plus (e.g. `+x`), the identity.
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Minus,
}

/// Grouping direction for operators of equal precedence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    /// `a op b op c` groups as `(a op b) op c`.
    Left,
    /// `a op b op c` groups as `a op (b op c)`.
    Right,
}

/// Position of an operator relative to its operands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Fixity {
    /// Written before its single operand.
    Prefix,
    /// Written between its two operands.
    Infix,
}

/// Any operator that can sit on the evaluator's operator stack.
///
/// All parsing decisions are driven by the metadata returned from the methods
/// on this type. The table is immutable and lives entirely in `const fn`s.
///
/// # Example
/// ```
/// use shunt::interpreter::operator::{Associativity, BinaryOperator, Operator, UnaryOperator};
///
/// let pow = Operator::Binary(BinaryOperator::Pow);
/// let neg = Operator::Unary(UnaryOperator::Minus);
///
/// assert!(pow.precedence() > neg.precedence());
/// assert_eq!(pow.associativity(), Associativity::Right);
/// assert_eq!(neg.arity(), 1);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// A prefix operator taking one operand.
    Unary(UnaryOperator),
    /// An infix operator taking two operands.
    Binary(BinaryOperator),
}

impl Operator {
    /// Every operator known to the evaluator.
    pub const ALL: [Self; 8] = [Self::Binary(BinaryOperator::Equal),
                                Self::Binary(BinaryOperator::Add),
                                Self::Binary(BinaryOperator::Sub),
                                Self::Binary(BinaryOperator::Mul),
                                Self::Binary(BinaryOperator::Div),
                                Self::Unary(UnaryOperator::Plus),
                                Self::Unary(UnaryOperator::Minus),
                                Self::Binary(BinaryOperator::Pow)];

    /// Binding strength; higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Binary(BinaryOperator::Equal) => 1,
            Self::Binary(BinaryOperator::Add | BinaryOperator::Sub) => 2,
            Self::Binary(BinaryOperator::Mul | BinaryOperator::Div) => 3,
            Self::Unary(_) => 4,
            Self::Binary(BinaryOperator::Pow) => 5,
        }
    }

    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Unary(_) | Self::Binary(BinaryOperator::Pow) => Associativity::Right,
            Self::Binary(_) => Associativity::Left,
        }
    }

    #[must_use]
    pub const fn fixity(self) -> Fixity {
        match self {
            Self::Unary(_) => Fixity::Prefix,
            Self::Binary(_) => Fixity::Infix,
        }
    }

    /// Number of operands consumed from the value stack.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }

    /// Decides whether `self`, arriving while `top` is pending, is pushed on
    /// top of it (`true`) or forces `top` to be applied first (`false`).
    ///
    /// A prefix operator always shifts: it cannot have a left operand, so
    /// nothing pending can be completed by it.
    #[must_use]
    pub const fn shifts_over(self, top: Self) -> bool {
        let (incoming, pending) = (self.precedence(), top.precedence());

        incoming > pending
        || (incoming == pending && matches!(self.associativity(), Associativity::Right))
        || (incoming <= pending && matches!(self.fixity(), Fixity::Prefix))
    }
}

/// Checks that operators sharing a precedence also share an associativity.
///
/// Evaluated in a `const` item below, so an inconsistent table is a compile
/// error rather than something detected while parsing.
#[must_use]
pub const fn table_is_consistent() -> bool {
    let mut i = 0;
    while i < Operator::ALL.len() {
        let mut j = i + 1;
        while j < Operator::ALL.len() {
            let (a, b) = (Operator::ALL[i], Operator::ALL[j]);
            let same_assoc = matches!((a.associativity(), b.associativity()),
                                      (Associativity::Left, Associativity::Left)
                                      | (Associativity::Right, Associativity::Right));
            if a.precedence() == b.precedence() && !same_assoc {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(table_is_consistent(),
                      "operators with equal precedence must share an associativity");

impl From<BinaryOperator> for Operator {
    fn from(op: BinaryOperator) -> Self {
        Self::Binary(op)
    }
}

impl From<UnaryOperator> for Operator {
    fn from(op: UnaryOperator) -> Self {
        Self::Unary(op)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Equal => "=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "u+",
            Self::Minus => "u-",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unary(op) => write!(f, "{op}"),
            Self::Binary(op) => write!(f, "{op}"),
        }
    }
}
