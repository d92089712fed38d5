// src/domain/request_log/entity.rs
use super::value_objects::RequestLogId;
use chrono::{DateTime, TimeDelta, Utc};

/// One HTTP request/response pair, recorded for auditing.
///
/// Every field is public and stored exactly as assigned. Nothing is validated:
/// a status outside 100..=599 or a negative latency is kept as-is, and it is up
/// to the collaborator receiving the entry to decide what to do with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLog {
    pub id: RequestLogId,
    pub method: String,
    /// Request path without the query string.
    pub path: String,
    /// Raw query string, without the leading `?`. Empty when absent.
    pub query: String,
    pub status: u16,
    pub latency: TimeDelta,
    pub ip: String,
    pub user_agent: String,
    pub created_at: DateTime<Utc>,
}

impl Default for RequestLog {
    fn default() -> Self {
        Self {
            id: RequestLogId::default(),
            method: String::new(),
            path: String::new(),
            query: String::new(),
            status: 0,
            latency: TimeDelta::zero(),
            ip: String::new(),
            user_agent: String::new(),
            created_at: DateTime::<Utc>::default(),
        }
    }
}
