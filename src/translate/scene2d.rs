use glam::DVec2;

use super::{handle_zoom, ModeTranslator, TranslateContext};
use crate::camera::CameraControl;

/// Screen pixels of pan per unit of joystick distance.
const PAN_2D_DIVISOR: f64 = 10.0;

/// Flat map: pans in the ground plane, zooms by the frustum size.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scene2DTranslator;

impl ModeTranslator for Scene2DTranslator {
    fn zoom(&self, ctx: &TranslateContext<'_>, camera: &mut dyn CameraControl) {
        let magnitude = camera.magnitude();
        let _ = handle_zoom(ctx, camera, magnitude, None);
    }

    fn pan(&self, ctx: &TranslateContext<'_>, camera: &mut dyn CameraControl) {
        let Some(offset) = ctx.pan_offset(0.0) else {
            return;
        };
        let start = camera.pick_ray(offset / PAN_2D_DIVISOR).origin;
        let end = camera.pick_ray(DVec2::ZERO).origin;

        log::trace!("pan 2D by ({}, {})", start.x - end.x, start.y - end.y);
        camera.move_right(start.x - end.x);
        camera.move_up(start.y - end.y);
    }
}
