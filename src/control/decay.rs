//! Per-frame relaxation of released knobs back to neutral.

use super::state::{is_moving, ControlState, ControlValue, Knob};

/// Fraction of a released knob's deflection kept each frame.
pub const DECAY_FACTOR: f64 = 0.9;

/// Spring-loaded controls and the knob that owns each.
const SPRING_CONTROLS: [(ControlValue, Knob); 3] = [
    (ControlValue::ZoomRingAngle, Knob::ZoomRing),
    (ControlValue::TiltRingAngle, Knob::TiltRing),
    (ControlValue::PointerDistance, Knob::PanJoystick),
];

/// Run one decay step.
///
/// Released zoom/tilt/joystick values shrink by [`DECAY_FACTOR`] and snap to
/// exactly zero once they are no longer moving. The compass angle is not
/// spring-loaded: it is overwritten with `camera_heading` (radians) every
/// frame, dragged or not.
pub fn relax(state: &mut ControlState, camera_heading: f64) {
    for (value, knob) in SPRING_CONTROLS {
        if state.is_dragging(knob) {
            continue;
        }
        let current = state.value(value);
        if is_moving(current) {
            state.set(value, current * DECAY_FACTOR);
        } else {
            state.set(value, 0.0);
        }
    }

    state.set_north_ring_angle(camera_heading.to_degrees());
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn released_zoom_ring_decays_by_a_tenth() {
        let mut state = ControlState::new();
        state.set_zoom_ring_angle(40.0);
        relax(&mut state, 0.0);
        assert!((state.zoom_ring_angle() - 36.0).abs() < 1e-12);
    }

    #[test]
    fn decay_converges_to_exact_zero_without_undershoot() {
        let mut state = ControlState::new();
        state.set_tilt_ring_angle(-45.0);
        state.set_pointer_distance(40.0);

        let mut frames = 0;
        while state.tilt_ring_angle() != 0.0 || state.pointer_distance() != 0.0 {
            relax(&mut state, 0.0);
            assert!(state.tilt_ring_angle() <= 0.0);
            assert!(state.pointer_distance() >= 0.0);
            frames += 1;
            assert!(frames < 200, "decay did not converge");
        }

        relax(&mut state, 0.0);
        assert_eq!(state.tilt_ring_angle(), 0.0);
        assert_eq!(state.pointer_distance(), 0.0);
    }

    #[test]
    fn dragged_knobs_hold_their_value() {
        let mut state = ControlState::new();
        state.set_zoom_ring_angle(30.0);
        state.set_dragging(Knob::ZoomRing, true);
        relax(&mut state, 0.0);
        assert_eq!(state.zoom_ring_angle(), 30.0);
    }

    #[test]
    fn north_ring_follows_heading_even_while_dragged() {
        let mut state = ControlState::new();
        state.set_north_ring_angle(123.0);
        state.set_dragging(Knob::NorthRing, true);
        relax(&mut state, FRAC_PI_2);
        assert!((state.north_ring_angle() - 90.0).abs() < 1e-12);
    }
}
