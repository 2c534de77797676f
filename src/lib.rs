//! # Zoomlet
//!
//! Press-to-zoom image magnification.
//!
//! Pressing the primary pointer button over an image magnifies it around the
//! press point; pressing again restores it. The behaviour lives in a small
//! host-independent state machine ([`ZoomToggle`]) that talks to its host
//! through the [`ZoomSurface`] trait. Two hosts ship with the crate: the
//! browser DOM (feature `wasm`) and an egui widget (feature `egui`).

pub mod core;
pub mod input;
pub mod prelude;
pub mod traits;

#[cfg(feature = "egui")]
pub mod ui;

#[cfg(feature = "wasm")]
pub mod web;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::ZoomConfig,
    geo::{Point, Rect},
    state::ScaleState,
    transform::{TransformOrigin, ZoomTransform},
};

pub use input::{
    events::{EventHandled, EventResponse, MouseButton, Transition, ZoomEvent},
    handler::ZoomToggle,
};

pub use traits::ZoomSurface;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, ZoomError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum ZoomError {
    #[error("Required element missing: no match for selector `{selector}`")]
    MissingElement { selector: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Host error: {0}")]
    Host(String),
}

/// Error type alias for convenience
pub type Error = ZoomError;
