use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtlasError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("collection load failed: {0}")]
    CollectionLoad(String),
}

pub type Result<T> = std::result::Result<T, AtlasError>;

/// Settled errors are shared between every reader of a suspense gate,
/// since transport errors are not cloneable.
pub type SharedError = Arc<AtlasError>;
