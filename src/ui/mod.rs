pub mod widget;

pub use widget::{PaintedImage, ZoomView};
