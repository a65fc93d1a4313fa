//! Per-mode translation of control values into camera motion.
//!
//! Each scene mode has one [`ModeTranslator`]. The shared
//! [`update`](ModeTranslator::update) gates every sub-operation on its
//! feature flag and on whether the driving control is moving, so resting
//! knobs issue no camera commands at all.

/// Columbus view translator.
pub mod columbus;
/// 2D translator.
pub mod scene2d;
/// 3D translator, generalized rotation and tilt.
pub mod scene3d;
/// Zoom-rate shaping shared by every mode.
pub mod zoom;

use glam::DVec2;

pub use columbus::ColumbusTranslator;
pub use scene2d::Scene2DTranslator;
pub use scene3d::{rotate_3d, tilt_3d, Scene3DTranslator};
pub use zoom::handle_zoom;

use crate::camera::CameraControl;
use crate::control::{is_moving, ControlState};
use crate::geometry::Ellipsoid;
use crate::options::NavigationOptions;

/// Joystick distances at or below this do not pan.
pub const PAN_DEAD_ZONE: f64 = 5.0;

/// Reference body plus the rotate-rate scaling derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyScale {
    ellipsoid: Ellipsoid,
    rotate_factor: f64,
    rotate_rate_adjustment: f64,
}

impl BodyScale {
    /// Scaling for `ellipsoid`: the rotate factor is one over its maximum
    /// radius and the rate baseline is the radius itself.
    #[must_use]
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        let radius = ellipsoid.maximum_radius();
        Self {
            ellipsoid,
            rotate_factor: 1.0 / radius,
            rotate_rate_adjustment: radius,
        }
    }

    /// The reference body.
    #[must_use]
    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// `1 / max radius`.
    #[must_use]
    pub fn rotate_factor(&self) -> f64 {
        self.rotate_factor
    }

    /// Radial distance at which the rotate rate is zero before clamping.
    #[must_use]
    pub fn rotate_rate_adjustment(&self) -> f64 {
        self.rotate_rate_adjustment
    }

    /// Altitude-dependent rate for a camera `rho` from the body center.
    #[must_use]
    pub fn rotate_rate(&self, rho: f64) -> f64 {
        self.rotate_factor * (rho - self.rotate_rate_adjustment)
    }
}

impl Default for BodyScale {
    fn default() -> Self {
        Self::new(Ellipsoid::WGS84)
    }
}

/// Everything a translator reads during one frame.
#[derive(Debug, Clone, Copy)]
pub struct TranslateContext<'a> {
    /// Control values after this frame's decay step.
    pub state: &'a ControlState,
    /// Feature flags, limits and rates.
    pub options: &'a NavigationOptions,
    /// Active reference body.
    pub body: BodyScale,
    /// Host canvas size in pixels.
    pub canvas: DVec2,
}

impl TranslateContext<'_> {
    /// Screen-space center of the canvas.
    #[must_use]
    pub fn canvas_center(&self) -> DVec2 {
        self.canvas * 0.5
    }

    /// Joystick offset `(distance·cos θ, distance·sin θ)` for the joystick
    /// direction minus `north` (degrees). `None` inside the dead zone.
    #[must_use]
    pub fn pan_offset(&self, north: f64) -> Option<DVec2> {
        let distance = self.state.pointer_distance();
        if distance <= PAN_DEAD_ZONE {
            return None;
        }
        let angle = (self.state.pointer_direction() - north).to_radians();
        Some(DVec2::new(angle.cos(), angle.sin()) * distance)
    }
}

/// Camera motion for one scene mode.
pub trait ModeTranslator {
    /// Drive the zoom from the zoom ring.
    fn zoom(&self, ctx: &TranslateContext<'_>, camera: &mut dyn CameraControl);

    /// Drive panning from the joystick.
    fn pan(&self, ctx: &TranslateContext<'_>, camera: &mut dyn CameraControl);

    /// Drive tilting from the tilt ring. Only 3D tilts.
    fn tilt(&self, _ctx: &TranslateContext<'_>, _camera: &mut dyn CameraControl) {}

    /// Run the enabled sub-operations whose control is moving.
    fn update(&self, ctx: &TranslateContext<'_>, camera: &mut dyn CameraControl) {
        let motion = &ctx.options.motion;
        let state = ctx.state;

        if motion.enable_zoom && is_moving(state.zoom_ring_angle()) {
            self.zoom(ctx, camera);
        }
        if motion.enable_translate && is_moving(state.pointer_distance()) {
            self.pan(ctx, camera);
        }
        if motion.enable_tilt && is_moving(state.tilt_ring_angle()) {
            self.tilt(ctx, camera);
        }
    }
}

#[cfg(test)]
pub(crate) fn context<'a>(
    state: &'a ControlState,
    options: &'a NavigationOptions,
) -> TranslateContext<'a> {
    TranslateContext {
        state,
        options,
        body: BodyScale::default(),
        canvas: DVec2::new(800.0, 600.0),
    }
}
