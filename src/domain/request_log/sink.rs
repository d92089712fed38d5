// src/domain/request_log/sink.rs
use super::entity::RequestLog;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Receives finished entries from whatever captured them.
///
/// The entry is moved in; the sender keeps nothing and must not expect to
/// observe changes made on the other side.
#[async_trait]
pub trait RequestLogSink: Send + Sync {
    async fn record(&self, log: RequestLog) -> DomainResult<()>;
}
