//! Library half of the `bt-inspect` binary: configuration, snapshot files and the
//! command bodies.

pub mod commands;
pub mod config;
pub mod load;

pub use commands::Outcome;
pub use config::InspectConfig;
pub use load::{load_tree, read_snapshot, write_snapshot, SnapshotFormat};
