use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use bt_model::AbsBehaviorTree;

use crate::trace::{StatusLog, StatusSink};
use crate::update::{apply_updates, ApplyReport, StatusUpdate};

/// A tree behind one lock, for a monitor thread writing status while other
/// threads read.
#[derive(Debug, Clone, Default)]
pub struct SharedTree {
    inner: Arc<RwLock<AbsBehaviorTree>>,
}

impl SharedTree {
    pub fn new(tree: AbsBehaviorTree) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, AbsBehaviorTree> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, AbsBehaviorTree> {
        self.inner.write()
    }

    /// Owned copy for readers that should not hold the lock.
    pub fn snapshot(&self) -> AbsBehaviorTree {
        self.inner.read().clone()
    }

    /// Swaps in a new tree, returning the old one.
    pub fn replace(&self, tree: AbsBehaviorTree) -> AbsBehaviorTree {
        std::mem::replace(&mut *self.inner.write(), tree)
    }

    pub fn try_read(&self) -> Option<RwLockReadGuard<'_, AbsBehaviorTree>> {
        self.inner.try_read()
    }

    /// Applies `updates` under the write lock. Events reach `sink` only after the
    /// lock is released, so a sink may read this tree.
    pub fn apply_updates<S: StatusSink + ?Sized>(
        &self,
        updates: &[StatusUpdate],
        first_seq: u64,
        sink: &mut S,
    ) -> ApplyReport {
        let mut pending = StatusLog::default();
        let report = {
            let mut tree = self.inner.write();
            apply_updates(&mut tree, updates, first_seq, &mut pending)
        };
        for event in pending.events {
            sink.emit(event);
        }
        report
    }

    /// True when `incoming` differs structurally from the held tree.
    pub fn needs_reload(&self, incoming: &AbsBehaviorTree) -> bool {
        *self.inner.read() != *incoming
    }
}
