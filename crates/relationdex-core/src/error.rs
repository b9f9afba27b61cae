use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("contact id is required")]
    EmptyId,
    #[error("contact name is required")]
    EmptyName,
    #[error("invalid frequency: {0}")]
    InvalidFrequency(String),
    #[error("invalid interaction kind: {0}")]
    InvalidInteractionKind(String),
}
