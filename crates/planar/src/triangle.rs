//! Triangle given by side lengths.
//!
//! - Sides are stored sorted ascending (`a ≤ b ≤ c`); the order of constructor
//!   arguments is not observable beyond that.
//! - Validity: all sides positive and finite, strict inequality `a + b > c`.
//!   Degenerate (collinear) triples with `a + b == c` are rejected.
//! - Area uses Heron's formula on the semi-perimeter.

use std::fmt;

use nalgebra::Vector2;

use crate::cfg::{GeomCfg, RIGHT_REL_TOL};
use crate::error::{GeometryError, Violation};
use crate::shape::Shape;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangle {
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, GeometryError> {
        let mut sides = [a, b, c];
        for &side in &sides {
            if side <= 0.0 {
                return Err(Violation::NonPositiveSide { side }.into());
            }
            if !side.is_finite() {
                return Err(Violation::NonFinite { value: side }.into());
            }
        }
        sides.sort_by(f64::total_cmp);
        let [a, b, c] = sides;
        if a + b <= c {
            return Err(Violation::TriangleInequality { a, b, c }.into());
        }
        Ok(Self { a, b, c })
    }

    /// Triangle spanned by three points; side lengths are the pairwise distances.
    pub fn from_vertices(
        p: Vector2<f64>,
        q: Vector2<f64>,
        r: Vector2<f64>,
    ) -> Result<Self, GeometryError> {
        Self::new((q - p).norm(), (r - q).norm(), (p - r).norm())
    }

    /// Sides in ascending order.
    #[inline]
    pub fn sides(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    #[inline]
    pub fn semi_perimeter(&self) -> f64 {
        (self.a + self.b + self.c) / 2.0
    }

    /// Right-angle test with the default relative tolerance (`1e-9`).
    pub fn is_right(&self) -> bool {
        self.is_right_with(RIGHT_REL_TOL)
    }

    pub fn is_right_cfg(&self, cfg: GeomCfg) -> bool {
        self.is_right_with(cfg.right_rel_tol)
    }

    /// `|a² + b² − c²| ≤ rel_tol · max(|a² + b²|, |c²|)`, evaluated on sides
    /// scaled by `c` so squares neither underflow nor overflow.
    pub fn is_right_with(&self, rel_tol: f64) -> bool {
        let legs = (self.a / self.c).powi(2) + (self.b / self.c).powi(2);
        (legs - 1.0).abs() <= rel_tol * legs.max(1.0)
    }
}

impl Shape for Triangle {
    fn area(&self) -> f64 {
        let radicand = heron_radicand(self.a, self.b, self.c);
        if radicand.is_normal() {
            return radicand.sqrt();
        }
        // Radicand under- or overflowed: redo on the unit-scaled triangle.
        let c = self.c;
        heron_radicand(self.a / c, self.b / c, 1.0).sqrt() * c * c
    }

    fn kind(&self) -> &'static str {
        "triangle"
    }
}

/// `s(s−a)(s−b)(s−c)`, clamped at zero since rounding can push slivers below it.
#[inline]
fn heron_radicand(a: f64, b: f64, c: f64) -> f64 {
    let s = (a + b + c) / 2.0;
    (s * (s - a) * (s - b) * (s - c)).max(0.0)
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle(a={}, b={}, c={})", self.a, self.b, self.c)
    }
}
