use std::f64::consts::PI;
use std::fmt;

use crate::error::{GeometryError, Violation};
use crate::shape::Shape;

/// Circle given by its radius. Invariant: `radius > 0` and finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self, GeometryError> {
        if radius <= 0.0 {
            return Err(Violation::NonPositiveRadius { radius }.into());
        }
        if !radius.is_finite() {
            return Err(Violation::NonFinite { value: radius }.into());
        }
        Ok(Self { radius })
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    /// `π r²`.
    #[inline]
    fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }

    fn kind(&self) -> &'static str {
        "circle"
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle(radius={})", self.radius)
    }
}
