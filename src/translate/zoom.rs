use crate::camera::CameraControl;

use super::TranslateContext;

/// Inside this band (degrees, exclusive) the zoom ring is geared down.
const FINE_ZOOM_BAND: (f64, f64) = (3.0, 25.0);
/// Degrees of ring deflection per unit ratio inside the fine band.
const FINE_ZOOM_DEGREES: f64 = 1440.0;
/// Degrees of ring deflection per unit ratio outside it.
const COARSE_ZOOM_DEGREES: f64 = 360.0;
/// Lower bound on the grazing percentage applied to the minimum height.
const MIN_GRAZING_PERCENTAGE: f64 = 0.25;
/// Stand-off kept from the zoom limits, in world units.
const LIMIT_STANDOFF: f64 = 1.0;

/// Fraction of the zoom rate a ring deflection of `angle` degrees asks for.
#[must_use]
pub fn zoom_angle_ratio(angle: f64) -> f64 {
    let magnitude = angle.abs();
    if magnitude > FINE_ZOOM_BAND.0 && magnitude < FINE_ZOOM_BAND.1 {
        angle / FINE_ZOOM_DEGREES
    } else {
        angle / COARSE_ZOOM_DEGREES
    }
}

/// Zoom the camera from the zoom ring, shaped by the distance to the
/// surface.
///
/// `distance_measure` is the mode's notion of distance to the surface.
/// `grazing_dot`, when given, shrinks the minimum approach distance at
/// shallow viewing angles. Returns the distance passed to
/// [`CameraControl::zoom_in`], or `None` when the zoom was suppressed at a
/// limit.
pub fn handle_zoom(
    ctx: &TranslateContext<'_>,
    camera: &mut dyn CameraControl,
    distance_measure: f64,
    grazing_dot: Option<f64>,
) -> Option<f64> {
    if !distance_measure.is_finite() {
        log::debug!("zoom skipped: distance measure is {distance_measure}");
        return None;
    }

    let limits = &ctx.options.limits;
    let rates = &ctx.options.rates;

    let percentage = grazing_dot
        .filter(|dot| dot.is_finite())
        .map_or(1.0, |dot| dot.abs().clamp(MIN_GRAZING_PERCENTAGE, 1.0));
    let min_height = limits.minimum_zoom_distance * percentage;
    let max_height = limits.maximum_zoom_distance;

    let zoom_rate = (rates.zoom_factor * (distance_measure - min_height))
        .clamp(rates.minimum_zoom_rate, rates.maximum_zoom_rate);
    let ratio = zoom_angle_ratio(ctx.state.zoom_ring_angle())
        .min(limits.maximum_movement_ratio);
    let mut distance = zoom_rate * ratio;

    if distance > 0.0 && (distance_measure - min_height).abs() < LIMIT_STANDOFF {
        log::debug!("zoom in suppressed at minimum height {min_height}");
        return None;
    }
    if distance < 0.0 && (distance_measure - max_height).abs() < LIMIT_STANDOFF {
        log::debug!("zoom out suppressed at maximum height {max_height}");
        return None;
    }

    if distance_measure - distance < min_height {
        distance = distance_measure - min_height - LIMIT_STANDOFF;
    } else if distance_measure - distance > max_height {
        distance = distance_measure - max_height;
    }

    log::trace!("zoom_in({distance})");
    camera.zoom_in(distance);
    Some(distance)
}
