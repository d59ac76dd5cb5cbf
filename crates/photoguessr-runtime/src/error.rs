use std::io;

/// A failed read or write of the preference store.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum StoreError {
    #[display("preference store I/O failed: {_0}")]
    Io(io::Error),
    #[display("preference store holds malformed JSON: {_0}")]
    Json(serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RuntimeError {
    /// The runtime owning the action queue has been dropped.
    #[display("session runtime has stopped")]
    Stopped,
}
