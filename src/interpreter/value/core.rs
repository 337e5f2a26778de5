/// Represents a runtime value in the evaluator.
///
/// Every literal, variable and intermediate result is either a single number
/// or a flat vector of numbers. Arithmetic between the two broadcasts the
/// scalar over the vector elements.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A double precision floating-point number.
    Scalar(f64),
    /// A vector of numbers, written `[1, 2, 3]` in source.
    Vector(Vec<f64>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Self::Vector(v)
    }
}

impl<const N: usize> From<[f64; N]> for Value {
    fn from(v: [f64; N]) -> Self {
        Self::Vector(v.to_vec())
    }
}

impl Value {
    /// Returns the number if the value is a scalar.
    ///
    /// # Example
    /// ```
    /// use shunt::Value;
    ///
    /// assert_eq!(Value::Scalar(2.5).as_scalar(), Some(2.5));
    /// assert_eq!(Value::from([1.0, 2.0]).as_scalar(), None);
    /// ```
    #[must_use]
    pub const fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(x) => Some(*x),
            Self::Vector(_) => None,
        }
    }

    /// Returns the elements if the value is a vector.
    #[must_use]
    pub fn as_vector(&self) -> Option<&[f64]> {
        match self {
            Self::Scalar(_) => None,
            Self::Vector(v) => Some(v),
        }
    }

    /// Views the value as a slice of elements; a scalar is a one-element
    /// slice.
    #[must_use]
    pub fn elements(&self) -> &[f64] {
        match self {
            Self::Scalar(x) => std::slice::from_ref(x),
            Self::Vector(v) => v,
        }
    }

    /// Returns `true` if the value is a [`Value::Vector`].
    #[must_use]
    pub const fn is_vector(&self) -> bool {
        matches!(self, Self::Vector(..))
    }

    /// Applies `f` to the scalar or to every element of the vector.
    #[must_use]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        match self {
            Self::Scalar(x) => Self::Scalar(f(*x)),
            Self::Vector(v) => Self::Vector(v.iter().copied().map(f).collect()),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(x) => write!(f, "{x}"),
            Self::Vector(v) => {
                write!(f, "[")?;

                for (index, x) in v.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{x}")?;
                }

                write!(f, "]")
            },
        }
    }
}
