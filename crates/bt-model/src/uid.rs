//! Stable external node identifiers.
//!
//! A [`Uid`] is an opaque 16-bit token chosen by whoever builds the tree. It survives
//! reordering and is the key used by editors and by live status monitoring. The store
//! maps it to the node's current position with a [`UidRegistry`].

use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::UidError;

/// First value handed out by a default [`UidGenerator`].
pub const DEFAULT_UID_START: u16 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Uid(u16);

impl Uid {
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u16 {
        self.0
    }
}

impl From<u16> for Uid {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// UID -> position table. Grows only; re-registering a UID replaces its position.
#[derive(Debug, Clone, Default)]
pub struct UidRegistry {
    index: HashMap<Uid, i16>,
}

impl UidRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the position previously mapped to `uid`, if any.
    pub fn register(&mut self, uid: Uid, position: i16) -> Option<i16> {
        self.index.insert(uid, position)
    }

    pub fn resolve(&self, uid: Uid) -> Option<i16> {
        self.index.get(&uid).copied()
    }

    /// Reverse lookup. O(n); when several UIDs point at one position the smallest wins.
    pub fn uid_of(&self, position: i16) -> Option<Uid> {
        self.index
            .iter()
            .filter(|(_, &p)| p == position)
            .map(|(&uid, _)| uid)
            .min()
    }

    /// Reverse table for positions `0..len`, built in one pass. Same tie-break as
    /// [`UidRegistry::uid_of`].
    pub fn by_position(&self, len: usize) -> Vec<Option<Uid>> {
        let mut out: Vec<Option<Uid>> = vec![None; len];
        for (&uid, &position) in &self.index {
            let Some(slot) = usize::try_from(position).ok().and_then(|p| out.get_mut(p)) else {
                continue;
            };
            *slot = Some(slot.map_or(uid, |held| held.min(uid)));
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = (Uid, i16)> + '_ {
        self.index.iter().map(|(&uid, &p)| (uid, p))
    }
}

/// Monotonic UID source, safe to share between threads.
#[derive(Debug)]
pub struct UidGenerator {
    // One past u16::MAX marks exhaustion.
    next: AtomicU32,
}

impl UidGenerator {
    pub const fn starting_at(start: u16) -> Self {
        Self {
            next: AtomicU32::new(start as u32),
        }
    }

    /// Hands out the next UID. Refuses to wrap around once `u16::MAX` has been issued.
    pub fn next(&self) -> Result<Uid, UidError> {
        self.next
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                (n <= u16::MAX as u32).then_some(n + 1)
            })
            .map(|n| Uid(n as u16))
            .map_err(|_| UidError::Exhausted { last: u16::MAX })
    }

    /// The value the next call to [`UidGenerator::next`] would return.
    pub fn peek(&self) -> Option<Uid> {
        let n = self.next.load(Ordering::Acquire);
        u16::try_from(n).ok().map(Uid)
    }
}

impl Default for UidGenerator {
    fn default() -> Self {
        Self::starting_at(DEFAULT_UID_START)
    }
}

static GLOBAL_UIDS: UidGenerator = UidGenerator::starting_at(DEFAULT_UID_START);

/// Mints a UID from the process-wide generator.
///
/// Prefer passing a [`UidGenerator`] down to builders; this exists for callers that
/// have no context to carry one.
pub fn next_uid() -> Result<Uid, UidError> {
    GLOBAL_UIDS.next()
}
