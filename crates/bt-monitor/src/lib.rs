//! Live status monitoring on top of `bt-model`.
//!
//! Transport is someone else's problem: this crate takes already-decoded
//! [`StatusUpdate`]s keyed by UID and applies them to a tree.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod shared;
pub mod trace;
pub mod update;

pub use shared::SharedTree;
pub use trace::{NullStatusSink, StatusEvent, StatusLog, StatusSink};
pub use update::{apply_updates, reset_status, ApplyReport, StatusUpdate};
