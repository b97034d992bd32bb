use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Publish error: {0}")]
    Publish(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn external(msg: impl Into<String>) -> Self {
        Self::ExternalService(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn publish(msg: impl Into<String>) -> Self {
        Self::Publish(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
