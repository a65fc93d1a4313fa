//! Input handling: pointer event types, widget geometry, and the gesture
//! mapper that converts pointer events into control values.

/// Shared single-drag arbitration across widgets.
pub mod arbiter;
/// Platform-agnostic pointer events.
pub mod event;
/// Converts pointer gestures on knobs into control values.
pub mod gesture;
/// Widget rectangles and sizing.
pub mod layout;

pub use arbiter::{DragArbiter, WidgetId};
pub use event::{PointerEvent, PointerKind, PointerSource};
pub use gesture::{fold_angle, DragSession, PointerGestureMapper};
pub use layout::{PresentationSurface, Rect, SurfaceRects, WidgetLayout};
