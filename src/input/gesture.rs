//! Converts pointer gestures on the widget's knobs into control values.
//!
//! The mapper owns no per-gesture state itself: the widget keeps an
//! `Option<DragSession>` and passes it in with every event, so two widgets
//! never share drag bookkeeping unless they opt into a [`DragArbiter`].

use glam::DVec2;

use super::arbiter::{DragArbiter, WidgetId};
use super::event::{PointerEvent, PointerKind};
use super::layout::{PresentationSurface, WidgetLayout};
use crate::control::{ControlState, Knob};

/// Zoom ring angle that reads as zero deflection (the ring's left side).
pub const ZOOM_ZERO_ANGLE: f64 = -180.0;
/// Tilt ring angle that reads as zero deflection (the ring's right side).
pub const TILT_ZERO_ANGLE: f64 = 0.0;
/// Rotation from screen angles to compass angles, so north sits on top.
const COMPASS_ANGLE_OFFSET: f64 = 90.0;

/// Record of the knob an active pointer gesture is manipulating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    knob: Knob,
    center: DVec2,
    north_offset: f64,
}

impl DragSession {
    /// Start a session on `knob`, measuring angles around `center`
    /// (widget-space).
    #[must_use]
    pub const fn new(knob: Knob, center: DVec2) -> Self {
        Self {
            knob,
            center,
            north_offset: 0.0,
        }
    }

    /// The knob being dragged.
    #[must_use]
    pub const fn knob(&self) -> Knob {
        self.knob
    }

    /// Widget-space center used for angle computation.
    #[must_use]
    pub const fn center(&self) -> DVec2 {
        self.center
    }

    /// Compass calibration captured at gesture start: the pointer angle
    /// minus the compass angle.
    #[must_use]
    pub const fn north_offset(&self) -> f64 {
        self.north_offset
    }
}

/// Fold a screen angle into `[-90, 90]` relative to a ring's zero angle.
///
/// A single rotating indicator then behaves like a bidirectional slider:
/// the angle first wraps into `(-180, 180]` around `zero_angle`, then any
/// value past ±90° reflects back toward zero.
#[must_use]
pub fn fold_angle(angle: f64, zero_angle: f64) -> f64 {
    let mut folded = angle - zero_angle;
    if folded > 180.0 || folded <= -180.0 {
        folded = (folded + 180.0).rem_euclid(360.0) - 180.0;
    }
    if folded < -90.0 {
        -180.0 - folded
    } else if folded > 90.0 {
        180.0 - folded
    } else {
        folded
    }
}

/// Bring an angle above 180° back by one turn.
fn wrap_half_turn(angle: f64) -> f64 {
    if angle > 180.0 {
        angle - 360.0
    } else {
        angle
    }
}

/// Maps pointer events plus a knob hint to [`ControlState`] writes.
///
/// A mapper registered on a [`DragArbiter`] gives up any drag it holds when
/// dropped.
#[derive(Debug, Default)]
pub struct PointerGestureMapper {
    arbiter: Option<(DragArbiter, WidgetId)>,
}

impl PointerGestureMapper {
    /// A mapper that tracks drags for its own widget only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A mapper that shares one active drag with every other widget
    /// registered on `arbiter`.
    #[must_use]
    pub fn with_arbiter(arbiter: DragArbiter) -> Self {
        let id = arbiter.register();
        Self {
            arbiter: Some((arbiter, id)),
        }
    }

    /// Apply one pointer event.
    ///
    /// `knob_hint` is the knob the presentation layer found under the
    /// pointer; it is only consulted on presses. Returns `true` when the
    /// event was consumed and the host should suppress its default action
    /// (scrolling, text selection).
    pub fn handle(
        &self,
        session: &mut Option<DragSession>,
        state: &mut ControlState,
        surface: &dyn PresentationSurface,
        layout: &WidgetLayout,
        knob_hint: Option<Knob>,
        event: &PointerEvent,
    ) -> bool {
        let knob = match event.kind {
            PointerKind::Press => match knob_hint {
                Some(knob) => knob,
                None => return false,
            },
            PointerKind::Move | PointerKind::Release => match *session {
                Some(active) => active.knob,
                None => {
                    self.end(session, state);
                    return false;
                }
            },
        };

        let dragging = session.is_some_and(|s| s.knob == knob)
            && state.is_dragging(knob);
        let engaged = match event.kind {
            PointerKind::Press => event.is_single_pointer(),
            PointerKind::Move => dragging && event.is_single_pointer(),
            PointerKind::Release => false,
        };
        if !engaged {
            self.end(session, state);
            return false;
        }

        let bounds = surface.bounding_rect();
        // Once engaged, a drag may leave the widget without being lost.
        if !dragging && !bounds.contains(event.x, event.y) {
            return false;
        }

        if event.kind == PointerKind::Press {
            if !self.claim() {
                return false;
            }
            // A press on another knob supersedes the drag in progress.
            if session.is_some_and(|s| s.knob != knob) {
                state.clear_dragging();
            }
            *session = Some(DragSession::new(knob, layout.center()));
        }
        let Some(active) = session.as_mut() else {
            return false;
        };

        let offset = DVec2::new(event.x, event.y) - bounds.origin() - active.center;
        let raw_angle = offset.y.atan2(offset.x).to_degrees();

        state.set_dragging(knob, true);
        match knob {
            Knob::ZoomRing => {
                state.set_zoom_ring_angle(fold_angle(raw_angle, ZOOM_ZERO_ANGLE));
            }
            Knob::TiltRing => {
                state.set_tilt_ring_angle(fold_angle(raw_angle, TILT_ZERO_ANGLE));
            }
            Knob::NorthRing => {
                let angle = wrap_half_turn(raw_angle + COMPASS_ANGLE_OFFSET);
                if surface
                    .north_indicator_rect()
                    .contains_strict(event.x, event.y)
                {
                    active.north_offset = 0.0;
                    state.set_north_ring_angle(angle);
                } else if event.kind == PointerKind::Press {
                    active.north_offset = angle - state.north_ring_angle();
                } else {
                    state.set_north_ring_angle(angle - active.north_offset);
                }
            }
            Knob::PanJoystick => {
                state.set_pointer_distance(offset.length());
                state.set_pointer_direction(wrap_half_turn(raw_angle));
            }
        }
        true
    }

    fn claim(&self) -> bool {
        self.arbiter
            .as_ref()
            .is_none_or(|(arbiter, id)| arbiter.try_claim(*id))
    }

    fn end(&self, session: &mut Option<DragSession>, state: &mut ControlState) {
        *session = None;
        state.clear_dragging();
        if let Some((arbiter, id)) = &self.arbiter {
            arbiter.release(*id);
        }
    }
}

impl Drop for PointerGestureMapper {
    fn drop(&mut self) {
        if let Some((arbiter, id)) = &self.arbiter {
            arbiter.release(*id);
        }
    }
}
