//! Scoped outside-interaction and Escape listeners.
//!
//! The host owns the actual event hooks. The picker only asks for them while
//! it is not `Closed`, and the [`ListenerScope`] guarantees they are handed
//! back on every return to `Closed` and when the picker is dropped.

/// Global listeners the picker needs while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Pointer or focus interaction outside the picker
    OutsideInteraction,
    /// The Escape key
    Escape,
}

impl ListenerKind {
    pub const ALL: [Self; 2] = [Self::OutsideInteraction, Self::Escape];
}

/// Host-side registry of global listeners.
///
/// Calls are always paired: every `subscribe` is followed by exactly one
/// `unsubscribe` of the same kind before the next `subscribe`.
pub trait ListenerHost {
    fn subscribe(&mut self, kind: ListenerKind);
    fn unsubscribe(&mut self, kind: ListenerKind);
}

/// For hosts that deliver outside-interaction and Escape events without
/// explicit subscriptions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoListeners;

impl ListenerHost for NoListeners {
    fn subscribe(&mut self, _kind: ListenerKind) {}

    fn unsubscribe(&mut self, _kind: ListenerKind) {}
}

pub(crate) struct ListenerScope {
    host: Box<dyn ListenerHost>,
    active: bool,
}

impl ListenerScope {
    pub(crate) fn new(host: Box<dyn ListenerHost>) -> Self {
        Self { host, active: false }
    }

    pub(crate) const fn is_active(&self) -> bool {
        self.active
    }

    /// Idempotent.
    pub(crate) fn acquire(&mut self) {
        if self.active {
            return;
        }
        for kind in ListenerKind::ALL {
            self.host.subscribe(kind);
        }
        self.active = true;
        tracing::trace!("picker listeners acquired");
    }

    /// Idempotent.
    pub(crate) fn release(&mut self) {
        if !self.active {
            return;
        }
        for kind in ListenerKind::ALL {
            self.host.unsubscribe(kind);
        }
        self.active = false;
        tracing::trace!("picker listeners released");
    }
}

impl Drop for ListenerScope {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for ListenerScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerScope")
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}
