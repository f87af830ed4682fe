use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectorError {
    #[error("Unsupported expression in collection filter: {0}")]
    UnsupportedExpression(String),

    #[error("Collection type reference is not a resource type name")]
    InvalidTypeReference,

    #[error("Classes cannot be collected")]
    ClassesNotCollectable,

    #[error("Resource type {0} doesn't exist")]
    UnknownResourceType(String),
}

pub type Result<T> = std::result::Result<T, CollectorError>;
