// src/domain/request_log/value_objects.rs
use std::fmt;

/// Opaque identifier of a [`RequestLog`](super::RequestLog).
///
/// Any string is accepted, including the empty one. Uniqueness comes from
/// whatever generated it, not from this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestLogId(String);

impl RequestLogId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RequestLogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RequestLogId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RequestLogId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<RequestLogId> for String {
    fn from(value: RequestLogId) -> Self {
        value.0
    }
}
