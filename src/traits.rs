//! Shared trait abstractions between the zoom core and its hosts

use crate::{
    core::{geo::Rect, transform::ZoomTransform},
    Result,
};

/// The element the zoom toggle mutates
///
/// Implemented by each host: a DOM element in the browser, a painted image in
/// egui, a recording stub in tests.
pub trait ZoomSurface {
    /// Current bounding rectangle in viewport coordinates
    fn bounding_rect(&self) -> Rect;

    /// Writes the `transform` and `transform-origin` presentation attributes
    fn apply_transform(&mut self, transform: &ZoomTransform) -> Result<()>;
}

impl<S: ZoomSurface + ?Sized> ZoomSurface for Box<S> {
    fn bounding_rect(&self) -> Rect {
        (**self).bounding_rect()
    }

    fn apply_transform(&mut self, transform: &ZoomTransform) -> Result<()> {
        (**self).apply_transform(transform)
    }
}
