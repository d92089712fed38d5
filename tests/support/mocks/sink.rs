// tests/support/mocks/sink.rs
use async_trait::async_trait;
use request_log::{DomainError, DomainResult, RequestLog, RequestLogSink};
use std::sync::{Arc, Mutex};

/* -------------------------------- CapturingSink -------------------------------- */

/// Keeps every entry it is handed, in arrival order.
#[derive(Clone, Default)]
pub struct CapturingSink {
    inner: Arc<Mutex<Vec<RequestLog>>>,
}

impl CapturingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded(&self) -> Vec<RequestLog> {
        self.inner.lock().unwrap().clone()
    }
}

#[async_trait]
impl RequestLogSink for CapturingSink {
    async fn record(&self, log: RequestLog) -> DomainResult<()> {
        self.inner.lock().unwrap().push(log);
        Ok(())
    }
}

/* -------------------------------- FailingSink -------------------------------- */

/// Rejects everything with a persistence error.
pub struct FailingSink;

#[async_trait]
impl RequestLogSink for FailingSink {
    async fn record(&self, _log: RequestLog) -> DomainResult<()> {
        Err(DomainError::Persistence("store offline".into()))
    }
}
