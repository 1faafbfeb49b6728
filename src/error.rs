use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid pose input: {0}")]
    InvalidPoseInput(&'static str),

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Json Error: {0}")]
    Json(#[from] serde_json::Error),
}
