use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Cesium's far-plane sentinel, used as the unbounded zoom rate.
pub const FAR: f64 = 5_906_376_272_000.0;

/// Per-frame movement caps and camera distance bounds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Limits", inline)]
#[serde(default)]
pub struct LimitOptions {
    /// Largest per-frame step as a fraction of full range, in `[0, 1)`.
    /// Keeps the camera under control at low frame rates.
    #[schemars(title = "Maximum Movement Ratio", range(min = 0.0, max = 0.99), extend("step" = 0.01))]
    pub maximum_movement_ratio: f64,
    /// Closest the camera may zoom to the surface (meters).
    #[schemars(title = "Minimum Zoom Distance", range(min = 0.0))]
    pub minimum_zoom_distance: f64,
    /// Farthest the camera may zoom from the surface (meters).
    #[schemars(skip)]
    pub maximum_zoom_distance: f64,
}

impl Default for LimitOptions {
    fn default() -> Self {
        Self {
            maximum_movement_ratio: 0.1,
            minimum_zoom_distance: 20.0,
            maximum_zoom_distance: f64::INFINITY,
        }
    }
}

/// Rate shaping for zoom and rotation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Rates", inline)]
#[serde(default)]
pub struct RateOptions {
    /// Multiplier from distance-above-minimum to zoom rate.
    #[schemars(title = "Zoom Factor", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub zoom_factor: f64,
    /// Lower clamp on the zoom rate.
    #[schemars(skip)]
    pub minimum_zoom_rate: f64,
    /// Upper clamp on the zoom rate.
    #[schemars(skip)]
    pub maximum_zoom_rate: f64,
    /// Lower clamp on the rotate rate (radians per unit of control).
    #[schemars(skip)]
    pub minimum_rotate_rate: f64,
    /// Upper clamp on the rotate rate (radians per unit of control).
    #[schemars(skip)]
    pub maximum_rotate_rate: f64,
}

impl Default for RateOptions {
    fn default() -> Self {
        Self {
            zoom_factor: 1.0,
            minimum_zoom_rate: 20.0,
            maximum_zoom_rate: FAR,
            minimum_rotate_rate: 1.0 / 5000.0,
            maximum_rotate_rate: 1.77,
        }
    }
}
