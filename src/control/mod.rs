//! Control values driven by the widget's knobs.

/// Spring-return of released knobs and compass resynchronization.
pub mod decay;
/// Clamped control values, drag flags and change listeners.
pub mod state;

pub use state::{
    is_moving, ControlChange, ControlListener, ControlState, ControlValue,
    Knob, SubscriptionId,
};
