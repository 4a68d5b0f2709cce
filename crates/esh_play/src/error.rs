use esh_core::ChessError;

/// Anything that can stop a self-play run.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("failed to read or write file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to (de)serialize summary: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Chess(#[from] ChessError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
