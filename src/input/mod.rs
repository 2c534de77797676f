pub mod events;
pub mod handler;

// Re-export the essential types
pub use events::{EventHandled, EventResponse, MouseButton, Transition, ZoomEvent};
pub use handler::ZoomToggle;
