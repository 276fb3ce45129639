//! Reproducible random shapes.
//!
//! Model
//! - Circles: radius uniform in `[len_min, len_max]`.
//! - Triangles: two sides uniform in `[len_min, len_max]` plus an included
//!   angle in `[min_angle, π − min_angle]`; the third side follows from the law
//!   of cosines, so every draw satisfies the strict triangle inequality.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::circle::Circle;
use crate::error::{GeometryError, Violation};
use crate::triangle::Triangle;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub len_min: f64,
    pub len_max: f64,
    /// Smallest included angle (radians). Clamped to `[1e-6, π/2]`.
    pub min_angle: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            len_min: 0.1,
            len_max: 10.0,
            min_angle: 0.05,
        }
    }
}

impl SampleCfg {
    fn check(&self) -> Result<(), GeometryError> {
        if self.len_min <= 0.0 {
            return Err(Violation::NonPositiveSide { side: self.len_min }.into());
        }
        for value in [self.len_min, self.len_max, self.min_angle] {
            if !value.is_finite() {
                return Err(Violation::NonFinite { value }.into());
            }
        }
        Ok(())
    }

    fn length<R: Rng>(&self, rng: &mut R) -> f64 {
        let hi = self.len_max.max(self.len_min);
        if hi == self.len_min {
            return hi;
        }
        rng.gen_range(self.len_min..=hi)
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

pub fn draw_circle(cfg: SampleCfg, tok: ReplayToken) -> Result<Circle, GeometryError> {
    cfg.check()?;
    let mut rng = tok.to_std_rng();
    Circle::new(cfg.length(&mut rng))
}

pub fn draw_triangle(cfg: SampleCfg, tok: ReplayToken) -> Result<Triangle, GeometryError> {
    cfg.check()?;
    let mut rng = tok.to_std_rng();
    let b = cfg.length(&mut rng);
    let c = cfg.length(&mut rng);
    let lo = cfg.min_angle.clamp(1e-6, std::f64::consts::FRAC_PI_2);
    let theta = rng.gen_range(lo..=std::f64::consts::PI - lo);
    let a = (b * b + c * c - 2.0 * b * c * theta.cos()).max(0.0).sqrt();
    Triangle::new(a, b, c)
}
