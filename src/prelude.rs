//! Prelude module for common zoomlet types and traits
//!
//! `use zoomlet::prelude::*;` brings in everything a host needs to bind a
//! zoom toggle.

pub use crate::core::{
    config::ZoomConfig,
    constants::{DEFAULT_CONTAINER_SELECTOR, DEFAULT_IMAGE_SELECTOR, DEFAULT_MAGNIFICATION},
    geo::{Point, Rect},
    state::ScaleState,
    transform::{TransformOrigin, ZoomTransform},
};

pub use crate::input::{
    events::{EventHandled, EventResponse, MouseButton, Transition, ZoomEvent},
    handler::ZoomToggle,
};

pub use crate::traits::ZoomSurface;

#[cfg(feature = "egui")]
pub use crate::ui::{PaintedImage, ZoomView};

#[cfg(feature = "wasm")]
pub use crate::web::{install_on_ready, DomImage, ZoomBinding};

pub use crate::{Error as ZoomError, Result};
