use std::path::PathBuf;

/// Failures raised by the file-backed entry store.
///
/// `Read` and `Parse` only happen while opening a store and leave no usable
/// instance behind. `Serialize` and `Write` come out of a persist after the
/// in-memory collection has already changed. `IdsExhausted` is raised before
/// anything changes, whether during the load backfill or a `create`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read moods from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed mood file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize moods for {path}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write moods to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no mood ids left to allocate in {path}")]
    IdsExhausted { path: PathBuf },
}

impl StoreError {
    /// True for the errors that can only come out of opening a store.
    pub fn is_load_error(&self) -> bool {
        matches!(self, StoreError::Read { .. } | StoreError::Parse { .. })
    }
}

/// A label or tag that does not name any variant of the target enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("unknown {kind} '{tag}'")]
    UnknownTag { kind: &'static str, tag: String },
}

pub type StoreResult<T> = Result<T, StoreError>;
