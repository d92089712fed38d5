// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures reported by collaborators that receive a [`RequestLog`].
///
/// The entry itself never fails; these variants exist for the hand-off port.
///
/// [`RequestLog`]: crate::domain::request_log::RequestLog
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
}
