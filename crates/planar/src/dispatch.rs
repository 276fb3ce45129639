//! Area dispatch.
//!
//! Two entry points share one contract:
//! - `area(&shape)`: statically typed; anything implementing `Shape` (including
//!   `dyn Shape`) is accepted and non-shapes do not compile.
//! - `area_of(&value)`: takes an arbitrary `Any` value and resolves it against
//!   a table of downcasters. Non-shapes yield `UnsupportedType` carrying the
//!   value's type name.
//!
//! The default table knows `Circle` and `Triangle` (bare or boxed) and the
//! trait-object wrappers `Box<dyn Shape>`, `Rc<dyn Shape>`, `Arc<dyn Shape>`
//! and `&'static dyn Shape`. A new shape reaches `area_of` through any of those
//! wrappers with no change here, or bare through `Dispatcher::register` on a
//! caller-owned table.

use std::any::{type_name, Any};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::circle::Circle;
use crate::error::GeometryError;
use crate::shape::Shape;
use crate::triangle::Triangle;

type Downcast = fn(&dyn Any) -> Option<&dyn Shape>;

fn downcast<S: Shape + 'static>(value: &dyn Any) -> Option<&dyn Shape> {
    value.downcast_ref::<S>().map(|s| s as &dyn Shape)
}

const BUILTIN: &[Downcast] = &[
    downcast::<Circle>,
    downcast::<Triangle>,
    downcast::<Box<Circle>>,
    downcast::<Box<Triangle>>,
    downcast::<Box<dyn Shape>>,
    downcast::<Rc<dyn Shape>>,
    downcast::<Arc<dyn Shape>>,
    downcast::<&'static dyn Shape>,
];

/// Area of any shape.
#[inline]
pub fn area<S: Shape + ?Sized>(shape: &S) -> f64 {
    shape.area()
}

/// Area of an arbitrary value, or `UnsupportedType` if it is not a known shape.
///
/// `Any` only matches exact types, so a concrete shape outside the built-in
/// table must be passed as a `dyn Shape` wrapper (`Box`, `Rc`, `Arc`,
/// `&'static`) or registered on a `Dispatcher`.
pub fn area_of<T: Any>(value: &T) -> Result<f64, GeometryError> {
    dispatch(BUILTIN, value)
}

fn resolve<'a>(kinds: &[Downcast], value: &'a dyn Any) -> Option<&'a dyn Shape> {
    kinds.iter().find_map(|cast| cast(value))
}

fn dispatch<T: Any>(kinds: &[Downcast], value: &T) -> Result<f64, GeometryError> {
    resolve(kinds, value)
        .map(|shape| shape.area())
        .ok_or_else(|| GeometryError::unsupported(type_name::<T>()))
}

/// Downcast table for `area_of`-style dispatch over caller-chosen types.
#[derive(Clone)]
pub struct Dispatcher {
    kinds: Vec<Downcast>,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("kinds", &self.kinds.len())
            .finish()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self {
            kinds: BUILTIN.to_vec(),
        }
    }
}

impl Dispatcher {
    /// Table that accepts nothing until types are registered.
    pub fn empty() -> Self {
        Self { kinds: Vec::new() }
    }

    /// Accept values of concrete type `S`.
    pub fn register<S: Shape + 'static>(&mut self) -> &mut Self {
        self.kinds.push(downcast::<S>);
        self
    }

    /// The value viewed as a shape, if its type is in the table.
    pub fn resolve<'a>(&self, value: &'a dyn Any) -> Option<&'a dyn Shape> {
        resolve(&self.kinds, value)
    }

    pub fn area_of<T: Any>(&self, value: &T) -> Result<f64, GeometryError> {
        dispatch(&self.kinds, value)
    }
}
