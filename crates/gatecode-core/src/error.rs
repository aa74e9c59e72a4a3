use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatecodeError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("code length mismatch: expected {expected}, got {actual}")]
    CodeLength { expected: usize, actual: usize },

    #[error("attempt already in progress")]
    AttemptInProgress,

    #[error("code buffer incomplete: {0} of required characters entered")]
    BufferIncomplete(usize),

    #[error("config error: {0}")]
    Config(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type GcResult<T> = Result<T, GatecodeError>;
