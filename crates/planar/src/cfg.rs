//! Tolerance defaults.
//!
//! Policy
//! - Defaults are fixed constants; callers that need a different tolerance
//!   pass a `GeomCfg` (or an explicit value) at the call site.

/// Relative tolerance for the right-angle test `a² + b² ≈ c²`.
pub const RIGHT_REL_TOL: f64 = 1e-9;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub right_rel_tol: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            right_rel_tol: RIGHT_REL_TOL,
        }
    }
}
