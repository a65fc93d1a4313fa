use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

const NO_HOLDER: u64 = 0;

/// Identity of a widget registered with a [`DragArbiter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(NonZeroU64);

/// Shared "one drag at a time" lock across widgets.
///
/// Widgets without an arbiter track their drags independently. Widgets
/// sharing one (by cloning it) exclude each other: while one holds a drag,
/// presses on the others are refused until the holder releases.
#[derive(Debug, Clone)]
pub struct DragArbiter {
    holder: Arc<AtomicU64>,
    next_id: Arc<AtomicU64>,
}

impl DragArbiter {
    /// Create an arbiter with no holder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            holder: Arc::new(AtomicU64::new(NO_HOLDER)),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Allocate an identity for a new widget.
    #[must_use]
    pub fn register(&self) -> WidgetId {
        let raw = self.next_id.fetch_add(1, Ordering::Relaxed);
        // The counter starts at one and is never reset.
        WidgetId(NonZeroU64::new(raw).unwrap_or(NonZeroU64::MIN))
    }

    /// Claim the drag for `widget`. Succeeds if nobody holds it or `widget`
    /// already does.
    pub fn try_claim(&self, widget: WidgetId) -> bool {
        let id = widget.0.get();
        match self.holder.compare_exchange(
            NO_HOLDER,
            id,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => true,
            Err(current) => current == id,
        }
    }

    /// Release the drag if `widget` holds it.
    pub fn release(&self, widget: WidgetId) {
        let _ = self.holder.compare_exchange(
            widget.0.get(),
            NO_HOLDER,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
    }

    /// The widget currently holding the drag, if any.
    #[must_use]
    pub fn holder(&self) -> Option<WidgetId> {
        NonZeroU64::new(self.holder.load(Ordering::Acquire)).map(WidgetId)
    }
}

impl Default for DragArbiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_widget_is_refused_until_release() {
        let arbiter = DragArbiter::new();
        let a = arbiter.register();
        let b = arbiter.register();
        assert_ne!(a, b);

        assert!(arbiter.try_claim(a));
        assert!(arbiter.try_claim(a));
        assert!(!arbiter.try_claim(b));
        assert_eq!(arbiter.holder(), Some(a));

        arbiter.release(b);
        assert_eq!(arbiter.holder(), Some(a));
        arbiter.release(a);
        assert_eq!(arbiter.holder(), None);
        assert!(arbiter.try_claim(b));
    }
}
