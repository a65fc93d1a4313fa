/// Platform-agnostic pointer events.
///
/// These are fed into a [`PointerGestureMapper`](super::PointerGestureMapper)
/// together with the knob (if any) the presentation layer hit-tested under
/// the pointer.
///
/// # Example
///
/// ```
/// use globe_nav::input::{PointerEvent, PointerKind};
///
/// let press = PointerEvent::mouse(PointerKind::Press, 40.0, 100.0);
/// let drag = PointerEvent::touch(PointerKind::Move, 42.0, 95.0, 1);
/// assert!(press.is_single_pointer() && drag.is_single_pointer());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Press, move or release.
    pub kind: PointerKind,
    /// Mouse or touch, with the active touch count.
    pub source: PointerSource,
    /// Horizontal client position in pixels.
    pub x: f64,
    /// Vertical client position in pixels (down is positive).
    pub y: f64,
}

/// Phase of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Mouse button down or touch start.
    Press,
    /// Mouse or touch movement.
    Move,
    /// Mouse button up or touch end.
    Release,
}

/// Device that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerSource {
    /// A mouse (always a single pointer).
    Mouse,
    /// A touch screen.
    Touch {
        /// Number of touch points currently down.
        touches: u32,
    },
}

impl PointerEvent {
    /// A mouse event at client position `(x, y)`.
    #[must_use]
    pub const fn mouse(kind: PointerKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            source: PointerSource::Mouse,
            x,
            y,
        }
    }

    /// A touch event at client position `(x, y)` with `touches` points down.
    #[must_use]
    pub const fn touch(kind: PointerKind, x: f64, y: f64, touches: u32) -> Self {
        Self {
            kind,
            source: PointerSource::Touch { touches },
            x,
            y,
        }
    }

    /// Whether exactly one pointer is involved. Multi-touch never drives a
    /// knob.
    #[must_use]
    pub const fn is_single_pointer(&self) -> bool {
        match self.source {
            PointerSource::Mouse => true,
            PointerSource::Touch { touches } => touches == 1,
        }
    }
}
