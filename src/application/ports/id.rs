// src/application/ports/id.rs
use crate::domain::request_log::RequestLogId;

/// Hands out identifiers for new entries. Implementations must not repeat
/// themselves for the lifetime of the store the entries end up in.
pub trait RequestLogIdGenerator: Send + Sync {
    fn next_id(&self) -> RequestLogId;
}
