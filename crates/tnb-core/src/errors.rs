use std::path::PathBuf;

/// Core error type for the notes bot.
///
/// Adapter crates map their specific errors into this type. Note-store input
/// problems never end up here; those are plain reply texts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid snapshot: {path}: {reason}")]
    Snapshot { path: PathBuf, reason: String },

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
