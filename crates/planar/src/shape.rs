//! The shape capability.

use std::rc::Rc;
use std::sync::Arc;

/// Anything with a well-defined, non-negative planar area.
///
/// Implementors are immutable value objects; `area` must be pure.
pub trait Shape {
    fn area(&self) -> f64;

    /// Short kind name used in logs and reports.
    fn kind(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<S: Shape + ?Sized> Shape for &S {
    #[inline]
    fn area(&self) -> f64 {
        (**self).area()
    }
    fn kind(&self) -> &'static str {
        (**self).kind()
    }
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    #[inline]
    fn area(&self) -> f64 {
        (**self).area()
    }
    fn kind(&self) -> &'static str {
        (**self).kind()
    }
}

impl<S: Shape + ?Sized> Shape for Rc<S> {
    #[inline]
    fn area(&self) -> f64 {
        (**self).area()
    }
    fn kind(&self) -> &'static str {
        (**self).kind()
    }
}

impl<S: Shape + ?Sized> Shape for Arc<S> {
    #[inline]
    fn area(&self) -> f64 {
        (**self).area()
    }
    fn kind(&self) -> &'static str {
        (**self).kind()
    }
}
