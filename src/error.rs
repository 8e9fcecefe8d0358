use thiserror::Error;

/// Errors surfaced by storage and snapshot decoding.
///
/// Store operations never return these; they log and fall back instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

pub type Result<T> = std::result::Result<T, Error>;
