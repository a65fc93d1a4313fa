use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Toggles gating each kind of camera motion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct MotionOptions {
    /// Allow panning with the joystick.
    #[schemars(title = "Pan")]
    pub enable_translate: bool,
    /// Allow zooming with the zoom ring.
    #[schemars(title = "Zoom")]
    pub enable_zoom: bool,
    /// Allow the compass ring to change the camera heading.
    #[schemars(title = "Rotate")]
    pub enable_rotate: bool,
    /// Allow tilting with the tilt ring (3D only).
    #[schemars(title = "Tilt")]
    pub enable_tilt: bool,
    /// Free-look toggle. Accepted for configuration compatibility; no
    /// control currently drives free-look.
    #[schemars(title = "Look")]
    pub enable_look: bool,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            enable_translate: true,
            enable_zoom: true,
            enable_rotate: true,
            enable_tilt: true,
            enable_look: true,
        }
    }
}

/// Inertia tuning exposed to hosts.
///
/// Knob decay uses a fixed factor; these values are carried through
/// presets untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Inertia", inline)]
#[serde(default)]
pub struct InertiaOptions {
    /// Spin inertia in `[0, 1)`.
    #[schemars(skip)]
    pub spin: f64,
    /// Translation inertia in `[0, 1)`.
    #[schemars(skip)]
    pub translate: f64,
    /// Zoom inertia in `[0, 1)`.
    #[schemars(skip)]
    pub zoom: f64,
}

impl Default for InertiaOptions {
    fn default() -> Self {
        Self {
            spin: 0.9,
            translate: 0.9,
            zoom: 0.8,
        }
    }
}
