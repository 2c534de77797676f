use serde::{Deserialize, Serialize};

/// Presentation state of the zoomable image
///
/// Held explicitly by the toggle; the CSS written to the host is a projection
/// of this value, never the other way round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScaleState {
    #[default]
    Unscaled,
    Magnified,
}

impl ScaleState {
    /// The state a press moves to
    pub fn toggled(self) -> Self {
        match self {
            Self::Unscaled => Self::Magnified,
            Self::Magnified => Self::Unscaled,
        }
    }

    pub fn is_magnified(self) -> bool {
        matches!(self, Self::Magnified)
    }
}
