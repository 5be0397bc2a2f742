use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Merge result has no status field")]
    MissingStatus,

    #[error("Unexpected merge status: {0}")]
    UnexpectedStatus(String),

    #[error("Merge collaborator failed: {0}")]
    Collaborator(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
