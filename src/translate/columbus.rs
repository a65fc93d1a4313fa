use glam::{DVec2, DVec3};

use super::{handle_zoom, ModeTranslator, TranslateContext};
use crate::camera::CameraControl;
use crate::geometry::{Ray, EPSILON6};

/// Normal of the map plane `z = 0`.
const MAP_PLANE_NORMAL: DVec3 = DVec3::Z;
/// Screen pixels of pan per unit of joystick distance.
const PAN_CV_DIVISOR: f64 = 10.0;
/// Divisor applied to the ground-plane pan distance.
const PAN_CV_SCALE: f64 = 100.0;

/// Oblique map view: compass-relative panning over the map plane, zoom by
/// the distance to it along the center ray.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumbusTranslator;

fn map_plane_point(ray: &Ray) -> DVec3 {
    ray.point_at(ray.plane_parameter(MAP_PLANE_NORMAL))
}

impl ModeTranslator for ColumbusTranslator {
    fn zoom(&self, ctx: &TranslateContext<'_>, camera: &mut dyn CameraControl) {
        let ray = camera.pick_ray(ctx.canvas_center());
        let _ = handle_zoom(ctx, camera, ray.plane_parameter(MAP_PLANE_NORMAL), None);
    }

    fn pan(&self, ctx: &TranslateContext<'_>, camera: &mut dyn CameraControl) {
        let Some(offset) = ctx.pan_offset(ctx.state.north_ring_angle()) else {
            return;
        };
        // Screen y points down, map y points north.
        let Some(direction) = DVec3::new(offset.x, -offset.y, 0.0).try_normalize()
        else {
            return;
        };

        let start = map_plane_point(&camera.pick_ray(offset / PAN_CV_DIVISOR));
        let end = map_plane_point(&camera.pick_ray(DVec2::ZERO));
        let magnitude = (start - end).length() / PAN_CV_SCALE;

        if magnitude.is_finite() && magnitude > EPSILON6 {
            log::trace!("pan CV by {magnitude} along {direction}");
            camera.move_direction(direction, magnitude);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::recording::{Command, RecordingCamera};
    use crate::control::ControlState;
    use crate::options::NavigationOptions;
    use crate::translate::context;

    fn pan(direction: f64, north: f64) -> Vec<Command> {
        let options = NavigationOptions::default();
        let mut state = ControlState::new();
        state.set_pointer_distance(20.0);
        state.set_pointer_direction(direction);
        state.set_north_ring_angle(north);
        let mut camera = RecordingCamera::above_plane(1000.0);
        ColumbusTranslator.pan(&context(&state, &options), &mut camera);
        camera.commands
    }

    #[test]
    fn pan_moves_over_the_map_plane() {
        let commands = pan(0.0, 0.0);
        assert_eq!(commands, vec![Command::Move(DVec3::X, 0.02)]);
    }

    #[test]
    fn pan_direction_is_relative_to_the_compass() {
        let commands = pan(0.0, 90.0);
        let [Command::Move(direction, magnitude)] = commands[..] else {
            unreachable!("unexpected commands {commands:?}");
        };
        assert!((direction - DVec3::Y).length() < 1e-12);
        assert!((magnitude - 0.02).abs() < 1e-12);
    }

    #[test]
    fn pan_parallel_to_the_plane_is_ignored() {
        let options = NavigationOptions::default();
        let mut state = ControlState::new();
        state.set_pointer_distance(20.0);
        let mut camera = RecordingCamera::above_plane(1000.0);
        camera.direction = DVec3::X;
        ColumbusTranslator.pan(&context(&state, &options), &mut camera);
        assert!(camera.commands.is_empty());
    }

    #[test]
    fn zoom_measures_distance_to_the_plane() {
        let options = NavigationOptions::default();
        let mut state = ControlState::new();
        state.set_zoom_ring_angle(10.0);
        let mut camera = RecordingCamera::above_plane(1000.0);
        // Magnitude is not what Columbus view zooms by.
        camera.magnitude = 1.0;
        ColumbusTranslator.zoom(&context(&state, &options), &mut camera);
        let zooms = camera.zooms();
        assert_eq!(zooms.len(), 1);
        assert!((zooms[0] - 980.0 * 10.0 / 1440.0).abs() < 1e-9);
    }
}
