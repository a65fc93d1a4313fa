use std::fmt;

use crate::geometry::EPSILON3;

/// Largest zoom ring deflection in degrees, either direction.
pub const MAX_ZOOM_RING_ANGLE: f64 = 45.0;
/// Largest tilt ring deflection in degrees, either direction.
pub const MAX_TILT_RING_ANGLE: f64 = 45.0;
/// Largest joystick distance from center, in widget units.
pub const MAX_POINTER_DISTANCE: f64 = 40.0;

/// The four draggable knobs of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Knob {
    /// Zoom ring (left slider).
    ZoomRing,
    /// Tilt ring (right slider).
    TiltRing,
    /// Compass ring carrying the north indicator.
    NorthRing,
    /// Pan joystick in the center.
    PanJoystick,
}

impl Knob {
    /// Every knob, in flag order.
    pub const ALL: [Self; 4] = [
        Self::ZoomRing,
        Self::TiltRing,
        Self::NorthRing,
        Self::PanJoystick,
    ];

    const fn index(self) -> usize {
        match self {
            Self::ZoomRing => 0,
            Self::TiltRing => 1,
            Self::NorthRing => 2,
            Self::PanJoystick => 3,
        }
    }
}

/// The five continuous control values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlValue {
    /// Zoom ring deflection, degrees in `[-45, 45]`.
    ZoomRingAngle,
    /// Tilt ring deflection, degrees in `[-45, 45]`.
    TiltRingAngle,
    /// Compass angle in degrees, unbounded.
    NorthRingAngle,
    /// Joystick distance from center in `[0, 40]`.
    PointerDistance,
    /// Joystick direction in degrees, unbounded.
    PointerDirection,
}

/// A change notification delivered to subscribers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlChange {
    /// A control value was written and differs from its previous value.
    Value {
        /// Which value changed.
        value: ControlValue,
        /// The stored (clamped) value.
        new: f64,
    },
    /// A knob's dragging flag flipped.
    Dragging {
        /// Which knob.
        knob: Knob,
        /// New flag state.
        dragging: bool,
    },
}

/// Handle returned by [`ControlState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Callback invoked synchronously on every control change.
pub type ControlListener = Box<dyn FnMut(ControlChange) + Send>;

/// Clamped control values and per-knob drag flags for one widget.
///
/// Every setter validates its input, stores it, then notifies subscribers
/// synchronously if the stored value changed. Non-finite writes are
/// ignored.
pub struct ControlState {
    zoom_ring_angle: f64,
    tilt_ring_angle: f64,
    north_ring_angle: f64,
    pointer_distance: f64,
    pointer_direction: f64,
    dragging: [bool; 4],
    listeners: Vec<(SubscriptionId, ControlListener)>,
    next_subscription: u64,
}

impl ControlState {
    /// Create a state with every knob at rest.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zoom_ring_angle: 0.0,
            tilt_ring_angle: 0.0,
            north_ring_angle: 0.0,
            pointer_distance: 0.0,
            pointer_direction: 0.0,
            dragging: [false; 4],
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Zoom ring deflection in degrees.
    #[must_use]
    pub fn zoom_ring_angle(&self) -> f64 {
        self.zoom_ring_angle
    }

    /// Tilt ring deflection in degrees.
    #[must_use]
    pub fn tilt_ring_angle(&self) -> f64 {
        self.tilt_ring_angle
    }

    /// Compass angle in degrees.
    #[must_use]
    pub fn north_ring_angle(&self) -> f64 {
        self.north_ring_angle
    }

    /// Joystick distance from center.
    #[must_use]
    pub fn pointer_distance(&self) -> f64 {
        self.pointer_distance
    }

    /// Joystick direction in degrees.
    #[must_use]
    pub fn pointer_direction(&self) -> f64 {
        self.pointer_direction
    }

    /// Read any control value.
    #[must_use]
    pub fn value(&self, value: ControlValue) -> f64 {
        match value {
            ControlValue::ZoomRingAngle => self.zoom_ring_angle,
            ControlValue::TiltRingAngle => self.tilt_ring_angle,
            ControlValue::NorthRingAngle => self.north_ring_angle,
            ControlValue::PointerDistance => self.pointer_distance,
            ControlValue::PointerDirection => self.pointer_direction,
        }
    }

    /// Set the zoom ring angle, clamped to `[-45, 45]`.
    pub fn set_zoom_ring_angle(&mut self, angle: f64) {
        self.set(ControlValue::ZoomRingAngle, angle);
    }

    /// Set the tilt ring angle, clamped to `[-45, 45]`.
    pub fn set_tilt_ring_angle(&mut self, angle: f64) {
        self.set(ControlValue::TiltRingAngle, angle);
    }

    /// Set the compass angle. Not clamped.
    pub fn set_north_ring_angle(&mut self, angle: f64) {
        self.set(ControlValue::NorthRingAngle, angle);
    }

    /// Set the joystick distance, clamped to `[0, 40]`.
    pub fn set_pointer_distance(&mut self, distance: f64) {
        self.set(ControlValue::PointerDistance, distance);
    }

    /// Set the joystick direction. Not clamped.
    pub fn set_pointer_direction(&mut self, direction: f64) {
        self.set(ControlValue::PointerDirection, direction);
    }

    /// Write any control value through its validating setter.
    pub fn set(&mut self, value: ControlValue, raw: f64) {
        if !raw.is_finite() {
            return;
        }
        let clamped = match value {
            ControlValue::ZoomRingAngle => {
                raw.clamp(-MAX_ZOOM_RING_ANGLE, MAX_ZOOM_RING_ANGLE)
            }
            ControlValue::TiltRingAngle => {
                raw.clamp(-MAX_TILT_RING_ANGLE, MAX_TILT_RING_ANGLE)
            }
            ControlValue::PointerDistance => {
                raw.clamp(0.0, MAX_POINTER_DISTANCE)
            }
            ControlValue::NorthRingAngle | ControlValue::PointerDirection => raw,
        };
        let slot = match value {
            ControlValue::ZoomRingAngle => &mut self.zoom_ring_angle,
            ControlValue::TiltRingAngle => &mut self.tilt_ring_angle,
            ControlValue::NorthRingAngle => &mut self.north_ring_angle,
            ControlValue::PointerDistance => &mut self.pointer_distance,
            ControlValue::PointerDirection => &mut self.pointer_direction,
        };
        if *slot == clamped {
            return;
        }
        *slot = clamped;
        self.notify(ControlChange::Value {
            value,
            new: clamped,
        });
    }

    /// Whether `knob` is currently being dragged.
    #[must_use]
    pub fn is_dragging(&self, knob: Knob) -> bool {
        self.dragging[knob.index()]
    }

    /// Whether any knob is currently being dragged.
    #[must_use]
    pub fn any_dragging(&self) -> bool {
        self.dragging.iter().any(|d| *d)
    }

    /// Set the dragging flag of one knob.
    pub fn set_dragging(&mut self, knob: Knob, dragging: bool) {
        let slot = &mut self.dragging[knob.index()];
        if *slot == dragging {
            return;
        }
        *slot = dragging;
        self.notify(ControlChange::Dragging { knob, dragging });
    }

    /// Clear every dragging flag.
    pub fn clear_dragging(&mut self) {
        for knob in Knob::ALL {
            self.set_dragging(knob, false);
        }
    }

    /// Register a listener called synchronously after each change.
    pub fn subscribe(&mut self, listener: ControlListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, change: ControlChange) {
        for (_, listener) in &mut self.listeners {
            listener(change);
        }
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ControlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlState")
            .field("zoom_ring_angle", &self.zoom_ring_angle)
            .field("tilt_ring_angle", &self.tilt_ring_angle)
            .field("north_ring_angle", &self.north_ring_angle)
            .field("pointer_distance", &self.pointer_distance)
            .field("pointer_direction", &self.pointer_direction)
            .field("dragging", &self.dragging)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Whether a control value is far enough from rest to drive the camera.
#[must_use]
pub fn is_moving(value: f64) -> bool {
    value.abs() > EPSILON3
}
