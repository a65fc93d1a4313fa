use serde::{Deserialize, Serialize};

use crate::control::ControlState;

/// Zoom ring nudge applied by one zoom command, in degrees.
pub const ZOOM_STEP: f64 = 0.25;

/// Discrete commands hosts can bind to keys or buttons.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum NavCommand {
    /// Nudge the zoom ring toward the surface.
    ZoomIn,
    /// Nudge the zoom ring away from the surface.
    ZoomOut,
}

impl NavCommand {
    /// Apply the command to the control values. The nudge then decays
    /// like any released ring deflection.
    pub fn apply(self, state: &mut ControlState) {
        let step = match self {
            Self::ZoomIn => ZOOM_STEP,
            Self::ZoomOut => -ZOOM_STEP,
        };
        state.set_zoom_ring_angle(state.zoom_ring_angle() + step);
    }
}
