use std::f64::consts::FRAC_PI_2;

use glam::{DMat4, DVec3};

use super::{handle_zoom, BodyScale, ModeTranslator, TranslateContext};
use crate::camera::CameraControl;
use crate::geometry::{
    east_north_up_to_fixed_frame, grazing_altitude_location, ray_ellipsoid,
    Ellipsoid, EPSILON3,
};

/// Joystick units per radian of globe rotation.
const PAN_3D_DIVISOR: f64 = 1000.0;
/// Tilt ring deflections at or below this (degrees) do not rotate.
const TILT_DEAD_ZONE: f64 = 3.0;
/// Degrees of tilt ring deflection per unit theta ratio.
const TILT_DEGREES: f64 = 7200.0;
/// Fraction of the minimum zoom distance the camera may tilt down to.
const MIN_TILT_HEIGHT_FRACTION: f64 = 0.25;

/// Full globe: pans by orbiting, zooms by height, tilts about the point
/// under the screen center.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scene3DTranslator;

impl ModeTranslator for Scene3DTranslator {
    fn zoom(&self, ctx: &TranslateContext<'_>, camera: &mut dyn CameraControl) {
        let position = camera.position();
        let Some(cartographic) =
            ctx.body.ellipsoid().cartesian_to_cartographic(position)
        else {
            log::debug!("zoom skipped: camera at the body center");
            return;
        };
        let grazing = position.normalize_or_zero().dot(camera.direction());
        let _ = handle_zoom(ctx, camera, cartographic.height, Some(grazing));
    }

    fn pan(&self, ctx: &TranslateContext<'_>, camera: &mut dyn CameraControl) {
        let Some(offset) = ctx.pan_offset(ctx.state.north_ring_angle()) else {
            return;
        };
        let mut delta = offset / PAN_3D_DIVISOR;
        // Constant ground speed on the standard body.
        if *ctx.body.ellipsoid() == Ellipsoid::WGS84 {
            delta *= ctx.body.rotate_rate(camera.position().length());
        }

        log::trace!("pan 3D by phi {} theta {}", delta.x, delta.y);
        camera.rotate_right(delta.x);
        camera.rotate_up(delta.y, None);
    }

    fn tilt(&self, ctx: &TranslateContext<'_>, camera: &mut dyn CameraControl) {
        let _ = tilt_3d(ctx, camera);
    }
}

/// Rotate the camera vertically by the tilt ring, at an altitude-dependent
/// rate.
///
/// `constrained_axis` is pinned on the camera for the duration of the call
/// and the previous axis restored afterward. With `restricted_angle` as
/// well, the angle between the reversed view direction and the axis is
/// clamped to it after rotating. Both are expressed in `transform`'s local
/// frame when one is given.
pub fn rotate_3d(
    ctx: &TranslateContext<'_>,
    camera: &mut dyn CameraControl,
    transform: Option<&DMat4>,
    constrained_axis: Option<DVec3>,
    restricted_angle: Option<f64>,
) {
    let previous_axis = camera.constrained_axis();
    if constrained_axis.is_some() {
        camera.set_constrained_axis(constrained_axis);
    }

    let rates = &ctx.options.rates;
    let rotate_rate = ctx
        .body
        .rotate_rate(camera.position().length())
        .clamp(rates.minimum_rotate_rate, rates.maximum_rotate_rate);

    let tilt = ctx.state.tilt_ring_angle();
    let theta_ratio = if tilt.abs() > TILT_DEAD_ZONE {
        tilt / TILT_DEGREES
    } else {
        0.0
    }
    .min(ctx.options.limits.maximum_movement_ratio);
    let delta_theta = -rotate_rate * theta_ratio;

    if delta_theta != 0.0 {
        log::trace!("rotate_up({delta_theta})");
        camera.rotate_up(delta_theta, transform);
    }

    if let (Some(axis), Some(restricted)) = (constrained_axis, restricted_angle) {
        let direction = camera.direction();
        let local = transform
            .map_or(direction, |t| t.inverse().transform_vector3(direction));
        let angle = (-local.dot(axis)).clamp(-1.0, 1.0).acos();
        if angle > restricted {
            camera.rotate_up(angle - restricted, transform);
        }
    }

    camera.set_constrained_axis(previous_axis);
}

/// Tilt the camera about the surface point under the screen center.
///
/// Returns `false` without touching the camera when it is already at the
/// minimum tilt height and asked to tilt further down, or when no pivot
/// point can be found this frame.
pub fn tilt_3d(ctx: &TranslateContext<'_>, camera: &mut dyn CameraControl) -> bool {
    let ellipsoid = ctx.body.ellipsoid();
    let min_height = ctx.options.limits.minimum_zoom_distance * MIN_TILT_HEIGHT_FRACTION;

    let Some(cartographic) = ellipsoid.cartesian_to_cartographic(camera.position())
    else {
        return false;
    };
    if cartographic.height - min_height - 1.0 < EPSILON3
        && ctx.state.tilt_ring_angle() < 0.0
    {
        log::debug!("tilt suppressed at minimum tilt height {min_height}");
        return false;
    }

    let ray = camera.pick_ray(ctx.canvas_center());
    let center = if let Some(interval) = ray_ellipsoid(&ray, ellipsoid) {
        ray.point_at(interval.start)
    } else {
        let Some(mut grazing) = grazing_altitude_location(&ray, ellipsoid)
            .and_then(|location| ellipsoid.cartesian_to_cartographic(location))
        else {
            log::debug!("tilt skipped: no pivot under the screen center");
            return false;
        };
        grazing.height = 0.0;
        ellipsoid.cartographic_to_cartesian(&grazing)
    };

    let transform = east_north_up_to_fixed_frame(center, ellipsoid);
    let angle = (min_height * MIN_TILT_HEIGHT_FRACTION)
        / (center - camera.position()).length();

    // Rotation rates on the unit sphere do not depend on the body's size.
    let unit = TranslateContext {
        body: BodyScale::new(Ellipsoid::UNIT_SPHERE),
        ..*ctx
    };
    rotate_3d(
        &unit,
        camera,
        Some(&transform),
        Some(DVec3::Z),
        Some(FRAC_PI_2 - angle),
    );
    true
}
