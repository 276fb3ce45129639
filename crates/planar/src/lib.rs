//! Area of simple planar shapes.
//!
//! Layout
//! - `shape`: the `Shape` capability (a shape knows its own area).
//! - `circle`, `triangle`: the two validated shape kinds.
//! - `dispatch`: `area` (static) and `area_of` (dynamic, rejects non-shapes).
//! - `rand`: reproducible samplers used by benches and tests.
//!
//! Adding a shape only requires `impl Shape for MyShape`; both dispatch paths
//! pick it up (the dynamic one via `Box<dyn Shape>` or `Dispatcher::register`).

pub mod cfg;
pub mod circle;
pub mod dispatch;
pub mod error;
pub mod rand;
pub mod shape;
pub mod triangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::GeomCfg;
pub use circle::Circle;
pub use dispatch::{area, area_of, Dispatcher};
pub use error::{GeometryError, Violation};
pub use shape::Shape;
pub use triangle::Triangle;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::dispatch::{area, area_of, Dispatcher};
    pub use crate::rand::{draw_circle, draw_triangle, ReplayToken, SampleCfg};
    pub use crate::{Circle, GeomCfg, GeometryError, Shape, Triangle, Violation};
    pub use nalgebra::Vector2 as Vec2;
}

#[cfg(test)]
mod tests;
