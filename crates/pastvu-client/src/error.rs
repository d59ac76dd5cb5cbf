use std::io;

use photoguessr_engine::{FetchError, FetchErrorKind};

pub type Result<T> = std::result::Result<T, PastvuError>;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum PastvuError {
    #[display("network error: {_0}")]
    Network(reqwest::Error),

    #[display("API error (status {status}): {message}")]
    #[from(skip)]
    Api {
        status: u16,
        message: String,
    },

    #[display("malformed response: {_0}")]
    Decode(serde_json::Error),

    #[display("image cache error: {_0}")]
    Cache(io::Error),
}

impl From<PastvuError> for FetchError {
    fn from(err: PastvuError) -> Self {
        let kind = match &err {
            PastvuError::Network(_) | PastvuError::Cache(_) => FetchErrorKind::Transport,
            PastvuError::Api { status, .. } => FetchErrorKind::Status(*status),
            PastvuError::Decode(_) => FetchErrorKind::Decode,
        };
        FetchError::new(kind, err.to_string())
    }
}
