use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("invalid codepoint '{input}': {source}")]
    InvalidCodepoint {
        input: String,
        #[source]
        source: notation::error::Error,
    },

    #[error("cannot encode: {0}")]
    Encode(#[from] utf8::Error),

    #[error("write error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
