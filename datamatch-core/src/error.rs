use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid file type")]
    InvalidFileType,

    #[error("No file provided")]
    MissingFile,

    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    #[error("Run not found: {0}")]
    RunNotFound(String),

    #[error("Malformed file: {0}")]
    MalformedFile(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
