//! Errors raised by shape construction and dynamic dispatch.

use std::fmt;

/// Geometric constraint that rejected a constructor input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Violation {
    /// Circle radius must be strictly positive.
    NonPositiveRadius { radius: f64 },
    /// Every triangle side must be strictly positive.
    NonPositiveSide { side: f64 },
    /// NaN or infinite length.
    NonFinite { value: f64 },
    /// Sorted sides violate `a + b > c` (degenerate equality included).
    TriangleInequality { a: f64, b: f64, c: f64 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Violation::NonPositiveRadius { radius } => {
                write!(f, "radius must be positive (got {radius})")
            }
            Violation::NonPositiveSide { side } => {
                write!(f, "side lengths must be positive (got {side})")
            }
            Violation::NonFinite { value } => write!(f, "length must be finite (got {value})"),
            Violation::TriangleInequality { a, b, c } => write!(
                f,
                "triangle inequality violated: {a} + {b} <= {c}"
            ),
        }
    }
}

/// Error type shared by constructors and `area_of`.
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// Constructor input breaks a geometric invariant.
    InvalidArgument(Violation),
    /// `area_of` was handed a value that is not a known shape.
    UnsupportedType { type_name: String },
}

impl GeometryError {
    pub(crate) fn invalid(v: Violation) -> Self {
        Self::InvalidArgument(v)
    }

    pub fn unsupported(type_name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, Self::UnsupportedType { .. })
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(v) => write!(f, "invalid argument: {v}"),
            Self::UnsupportedType { type_name } => write!(f, "unsupported type: {type_name}"),
        }
    }
}

impl std::error::Error for GeometryError {}

impl From<Violation> for GeometryError {
    fn from(v: Violation) -> Self {
        Self::invalid(v)
    }
}
