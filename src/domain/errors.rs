// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures the domain can express on its own. `Validation` is a rejected
/// value object or rule, `Conflict` a uniqueness or concurrent-write clash,
/// `Persistence` a storage fault the domain cannot interpret. Messages
/// already name the offending thing, so Display passes them through bare.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Persistence(String),
}
