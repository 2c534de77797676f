//! Defaults carried over from the page markup this component was written for.

/// Scale factor applied when the image is magnified (300%).
pub const DEFAULT_MAGNIFICATION: f64 = 3.0;

/// Scale factor of the unscaled presentation.
pub const UNSCALED: f64 = 1.0;

/// Selector of the element that listens for presses.
pub const DEFAULT_CONTAINER_SELECTOR: &str = ".zoom-container";

/// Selector of the image, resolved inside the container.
pub const DEFAULT_IMAGE_SELECTOR: &str = "img";

/// CSS value of a centred transform origin.
pub const CENTER_ORIGIN_CSS: &str = "center center";
