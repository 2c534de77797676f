use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

/// Input events the zoom toggle reacts to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ZoomEvent {
    /// Pointer button pressed inside the container
    Press {
        /// Viewport coordinates (`clientX`, `clientY`)
        position: Point,
        button: MouseButton,
    },
    /// Native drag gesture starting on the image
    DragStart,
}

/// Mouse button types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

impl MouseButton {
    /// Maps the DOM `MouseEvent.button` code
    pub fn from_dom_button(code: i16) -> Self {
        match code {
            0 => Self::Left,
            1 => Self::Middle,
            2 => Self::Right,
            other => Self::Other(other.max(0) as u16),
        }
    }

    pub fn is_primary(&self) -> bool {
        matches!(self, Self::Left)
    }
}

impl ZoomEvent {
    /// Primary-button press at `position`
    pub fn press(position: Point) -> Self {
        Self::Press {
            position,
            button: MouseButton::Left,
        }
    }
}

/// Whether an event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventHandled {
    Handled,
    NotHandled,
}

/// State change caused by a press
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Unscaled to magnified, anchored at an image-local offset
    Magnified { origin: Point },
    /// Magnified back to unscaled
    Unscaled,
}

/// What the host should do with the native event after the toggle saw it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventResponse {
    pub handled: EventHandled,
    pub prevent_default: bool,
    pub stop_propagation: bool,
    pub transition: Option<Transition>,
}

impl EventResponse {
    /// Event left untouched for other listeners
    pub fn ignored() -> Self {
        Self {
            handled: EventHandled::NotHandled,
            prevent_default: false,
            stop_propagation: false,
            transition: None,
        }
    }

    /// Event consumed: default action suppressed and propagation halted
    pub fn consumed(transition: Transition) -> Self {
        Self {
            handled: EventHandled::Handled,
            prevent_default: true,
            stop_propagation: true,
            transition: Some(transition),
        }
    }

    /// Default action suppressed, propagation untouched
    pub fn suppressed() -> Self {
        Self {
            handled: EventHandled::Handled,
            prevent_default: true,
            stop_propagation: false,
            transition: None,
        }
    }

    pub fn is_handled(&self) -> bool {
        self.handled == EventHandled::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_button_mapping() {
        assert_eq!(MouseButton::from_dom_button(0), MouseButton::Left);
        assert_eq!(MouseButton::from_dom_button(1), MouseButton::Middle);
        assert_eq!(MouseButton::from_dom_button(2), MouseButton::Right);
        assert_eq!(MouseButton::from_dom_button(4), MouseButton::Other(4));
        assert!(MouseButton::Left.is_primary());
        assert!(!MouseButton::Right.is_primary());
    }

    #[test]
    fn test_press_constructor_uses_primary_button() {
        let press = ZoomEvent::press(Point::new(100.0, 200.0));
        assert_eq!(
            press,
            ZoomEvent::Press {
                position: Point::new(100.0, 200.0),
                button: MouseButton::Left,
            }
        );
    }

    #[test]
    fn test_responses() {
        let ignored = EventResponse::ignored();
        assert!(!ignored.is_handled());
        assert!(!ignored.prevent_default && !ignored.stop_propagation);

        let consumed = EventResponse::consumed(Transition::Unscaled);
        assert!(consumed.is_handled());
        assert!(consumed.prevent_default && consumed.stop_propagation);

        let suppressed = EventResponse::suppressed();
        assert!(suppressed.prevent_default);
        assert!(!suppressed.stop_propagation);
    }
}
