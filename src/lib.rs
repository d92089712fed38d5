//! Audit log entry for a single HTTP request/response pair.
//!
//! [`RequestLog`] is a plain value: whoever captures a request fills it in,
//! stamps it with a [`Clock`](application::ports::time::Clock) and an id from a
//! [`RequestLogIdGenerator`](application::ports::id::RequestLogIdGenerator),
//! and hands it to a [`RequestLogSink`].

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use domain::errors::{DomainError, DomainResult};
pub use domain::request_log::{RequestLog, RequestLogId, RequestLogSink};
