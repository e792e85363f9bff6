use std::sync::Arc;

/// A listener receiving the displayed index after a resolution.
pub type IndexListener = Arc<dyn Fn(usize) + Send + Sync>;

/// A listener fired when a snap animation settles.
pub type CompleteListener = Arc<dyn Fn() + Send + Sync>;

/// Handle returned by listener registration; pass it to
/// [`crate::SnapEngine::remove_listener`] to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Multi-listener registry for the engine's three notifications.
///
/// Delivery is synchronous and follows registration order.
#[derive(Clone, Default)]
pub(crate) struct Listeners {
    next_id: u64,
    index_changed: Vec<(ListenerId, IndexListener)>,
    release: Vec<(ListenerId, IndexListener)>,
    lerp_complete: Vec<(ListenerId, CompleteListener)>,
}

impl Listeners {
    fn next_id(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub(crate) fn add_index_changed(&mut self, f: IndexListener) -> ListenerId {
        let id = self.next_id();
        self.index_changed.push((id, f));
        id
    }

    pub(crate) fn add_release(&mut self, f: IndexListener) -> ListenerId {
        let id = self.next_id();
        self.release.push((id, f));
        id
    }

    pub(crate) fn add_lerp_complete(&mut self, f: CompleteListener) -> ListenerId {
        let id = self.next_id();
        self.lerp_complete.push((id, f));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.len();
        self.index_changed.retain(|(i, _)| *i != id);
        self.release.retain(|(i, _)| *i != id);
        self.lerp_complete.retain(|(i, _)| *i != id);
        self.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.index_changed.len() + self.release.len() + self.lerp_complete.len()
    }

    pub(crate) fn emit_index_changed(&self, index: usize) {
        for (_, f) in &self.index_changed {
            f(index);
        }
    }

    pub(crate) fn emit_release(&self, index: usize) {
        for (_, f) in &self.release {
            f(index);
        }
    }

    pub(crate) fn emit_lerp_complete(&self) {
        for (_, f) in &self.lerp_complete {
            f();
        }
    }
}

impl core::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Listeners")
            .field("index_changed", &self.index_changed.len())
            .field("release", &self.release.len())
            .field("lerp_complete", &self.lerp_complete.len())
            .finish_non_exhaustive()
    }
}
