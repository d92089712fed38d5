// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};
use request_log::RequestLogId;
use request_log::application::ports::{id::RequestLogIdGenerator, time::Clock};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Clone)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Deterministic ids: `log-1`, `log-2`, ...
#[derive(Default)]
pub struct SequenceIdGenerator {
    next: AtomicU64,
}

impl RequestLogIdGenerator for SequenceIdGenerator {
    fn next_id(&self) -> RequestLogId {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        RequestLogId::new(format!("log-{n}"))
    }
}
