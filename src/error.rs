// src/error.rs

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("malformed JSON on stdin: {0}")]
    MalformedInput(#[from] serde_json::Error),

    #[error("invalid check configuration: {0}")]
    InvalidConfig(String),
}
