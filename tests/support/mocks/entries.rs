// tests/support/mocks/entries.rs
use chrono::{DateTime, TimeDelta, Utc};
use request_log::{RequestLog, RequestLogId};

/// The canonical `GET /users?id=5` entry.
pub fn sample_request_log(created_at: DateTime<Utc>) -> RequestLog {
    RequestLog {
        id: RequestLogId::new("a1"),
        method: "GET".into(),
        path: "/users".into(),
        query: "id=5".into(),
        status: 200,
        latency: TimeDelta::milliseconds(12),
        ip: "127.0.0.1".into(),
        user_agent: "curl/8.0".into(),
        created_at,
    }
}

pub fn sample_request_log_with(id: &str, status: u16, created_at: DateTime<Utc>) -> RequestLog {
    RequestLog {
        id: RequestLogId::new(id),
        status,
        ..sample_request_log(created_at)
    }
}
