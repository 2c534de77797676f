//! CSS-style scale transform applied to the zoomable image.

use crate::core::{
    constants::{CENTER_ORIGIN_CSS, UNSCALED},
    geo::{Point, Rect},
};
use serde::{Deserialize, Serialize};

/// Anchor of the scale transform, relative to the image's own box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum TransformOrigin {
    /// Geometric center of the image
    #[default]
    Center,
    /// Pixel offset from the image's top-left corner
    At(Point),
}

impl TransformOrigin {
    /// `transform-origin` property value
    pub fn to_css(&self) -> String {
        match self {
            Self::Center => CENTER_ORIGIN_CSS.to_string(),
            Self::At(offset) => format!("{}px {}px", offset.x, offset.y),
        }
    }

    /// Resolves the origin to viewport coordinates for an image laid out at `rect`
    pub fn resolve(&self, rect: &Rect) -> Point {
        match self {
            Self::Center => rect.center(),
            Self::At(offset) => rect.min.add(offset),
        }
    }
}

/// Transform state of the image (uniform scale about an origin)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    /// Scale factor (1.0 = no scaling)
    pub scale: f64,
    pub origin: TransformOrigin,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ZoomTransform {
    pub fn new(scale: f64, origin: TransformOrigin) -> Self {
        Self { scale, origin }
    }

    /// Unscaled presentation, anchored at the center
    pub fn identity() -> Self {
        Self::new(UNSCALED, TransformOrigin::Center)
    }

    /// Magnified presentation anchored at `offset` (image-local pixels)
    pub fn magnified(scale: f64, offset: Point) -> Self {
        Self::new(scale, TransformOrigin::At(offset))
    }

    /// `transform` property value, e.g. `scale(3)`
    pub fn css_transform(&self) -> String {
        format!("scale({})", self.scale)
    }

    /// `transform-origin` property value
    pub fn css_origin(&self) -> String {
        self.origin.to_css()
    }

    /// Area covered by an image laid out at `rect` once this transform is applied
    pub fn map_rect(&self, rect: &Rect) -> Rect {
        let origin = self.origin.resolve(rect);
        let map = |corner: &Point| origin.add(&corner.subtract(&origin).multiply(self.scale));
        Rect::new(map(&rect.min), map(&rect.max))
    }
}
