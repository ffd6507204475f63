#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use bt_model::{NodeStatus, Uid};

/// A status transition that was applied to a node.
///
/// `seq` orders events within one monitoring session; it is assigned by the caller of
/// [`apply_updates`](crate::apply_updates).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StatusEvent {
    pub seq: u64,
    pub uid: Uid,
    pub index: i16,
    pub from: NodeStatus,
    pub to: NodeStatus,
}

pub trait StatusSink {
    fn emit(&mut self, event: StatusEvent);
}

#[derive(Debug, Default)]
pub struct NullStatusSink;

impl StatusSink for NullStatusSink {
    fn emit(&mut self, _event: StatusEvent) {}
}

/// In-memory sink, handy for replays and tests.
#[derive(Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StatusLog {
    pub events: Vec<StatusEvent>,
}

impl StatusLog {
    pub fn push(&mut self, event: StatusEvent) {
        self.events.push(event);
    }

    /// Events for one node, oldest first.
    pub fn for_uid(&self, uid: Uid) -> impl Iterator<Item = &StatusEvent> + '_ {
        self.events.iter().filter(move |e| e.uid == uid)
    }
}

impl StatusSink for StatusLog {
    fn emit(&mut self, event: StatusEvent) {
        self.push(event);
    }
}

impl<S: StatusSink + ?Sized> StatusSink for Box<S> {
    fn emit(&mut self, event: StatusEvent) {
        (**self).emit(event);
    }
}
