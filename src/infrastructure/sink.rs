// src/infrastructure/sink.rs
use crate::domain::errors::DomainResult;
use crate::domain::request_log::{RequestLog, RequestLogSink};
use async_trait::async_trait;
use chrono::TimeDelta;
use tracing::info;

/// Writes each entry as a structured `tracing` event under the
/// `request_log` target. Diagnostic output only; nothing is stored.
#[derive(Debug, Clone, Copy)]
pub struct TracingRequestLogSink {
    enabled: bool,
}

impl Default for TracingRequestLogSink {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl TracingRequestLogSink {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&self, log: &RequestLog) {
        info!(
            target: "request_log",
            id = %log.id,
            method = %log.method,
            path = %log.path,
            query = %log.query,
            status = log.status,
            latency_us = latency_micros(log.latency),
            ip = %log.ip,
            user_agent = %log.user_agent,
            created_at = %log.created_at.to_rfc3339(),
            "request recorded"
        );
    }
}

/// Whole microseconds, sign kept, saturating past roughly 292,000 years.
fn latency_micros(latency: TimeDelta) -> i64 {
    latency.num_microseconds().unwrap_or(if latency < TimeDelta::zero() {
        i64::MIN
    } else {
        i64::MAX
    })
}

#[async_trait]
impl RequestLogSink for TracingRequestLogSink {
    async fn record(&self, log: RequestLog) -> DomainResult<()> {
        if self.enabled {
            self.emit(&log);
        }
        Ok(())
    }
}
