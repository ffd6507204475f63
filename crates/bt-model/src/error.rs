use thiserror::Error;

/// Failure to map a symbolic name onto one of the classifier enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} name: {name:?}")]
pub struct ParseKindError {
    pub kind: &'static str,
    pub name: String,
}

impl ParseKindError {
    pub(crate) fn new(kind: &'static str, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UidError {
    #[error("uid generator exhausted (last issued {last})")]
    Exhausted { last: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The next position would not fit the 16-bit index space.
    #[error("tree is full: cannot place node #{len} (max {max})")]
    CapacityExceeded { len: usize, max: usize },

    #[error(transparent)]
    Uid(#[from] UidError),
}
