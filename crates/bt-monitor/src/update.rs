use tracing::{debug, warn};

use bt_model::{AbsBehaviorTree, NodeStatus, Uid};

use crate::trace::{StatusEvent, StatusSink};

/// One transition as reported by a running tree: node `uid` went from `prev` to `status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusUpdate {
    pub uid: Uid,
    pub prev: NodeStatus,
    pub status: NodeStatus,
}

impl StatusUpdate {
    pub fn new(uid: Uid, prev: NodeStatus, status: NodeStatus) -> Self {
        Self { uid, prev, status }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub applied: usize,
    /// UIDs that did not resolve to a node, in arrival order.
    pub unknown: Vec<Uid>,
}

impl ApplyReport {
    pub fn is_clean(&self) -> bool {
        self.unknown.is_empty()
    }
}

/// Writes each update's status into the node registered under its UID.
///
/// Unknown UIDs are skipped and reported. Every applied update is emitted to `sink`
/// with consecutive sequence numbers starting at `first_seq`, wrapping at `u64::MAX`.
pub fn apply_updates<S: StatusSink + ?Sized>(
    tree: &mut AbsBehaviorTree,
    updates: &[StatusUpdate],
    first_seq: u64,
    sink: &mut S,
) -> ApplyReport {
    let mut report = ApplyReport::default();
    let mut seq = first_seq;

    for update in updates {
        let Some(node) = tree.node_at_uid_mut(update.uid) else {
            warn!(uid = %update.uid, "status update for unknown node");
            report.unknown.push(update.uid);
            continue;
        };

        if node.status != update.prev {
            debug!(
                uid = %update.uid,
                expected = %update.prev,
                actual = %node.status,
                "status update out of sync with local state"
            );
        }
        let from = node.status;
        node.status = update.status;

        sink.emit(StatusEvent {
            seq,
            uid: update.uid,
            index: node.index,
            from,
            to: update.status,
        });
        seq = seq.wrapping_add(1);
        report.applied += 1;
    }
    report
}

/// Puts every node back to `Idle`, as at the start of a monitoring session.
pub fn reset_status(tree: &mut AbsBehaviorTree) {
    for node in tree.nodes_mut() {
        node.status = NodeStatus::Idle;
    }
}
