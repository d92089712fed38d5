// src/infrastructure/id.rs
use crate::application::ports::id::RequestLogIdGenerator;
use crate::domain::request_log::RequestLogId;
use uuid::Uuid;

/// Random v4 UUIDs in hyphenated lowercase form, optionally prefixed as
/// `<prefix>_<uuid>`.
#[derive(Debug, Default, Clone)]
pub struct UuidRequestLogIdGenerator {
    prefix: Option<String>,
}

impl UuidRequestLogIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            prefix: (!prefix.is_empty()).then_some(prefix),
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }
}

impl RequestLogIdGenerator for UuidRequestLogIdGenerator {
    fn next_id(&self) -> RequestLogId {
        let uuid = Uuid::new_v4().hyphenated().to_string();
        match &self.prefix {
            Some(prefix) => RequestLogId::new(format!("{prefix}_{uuid}")),
            None => RequestLogId::new(uuid),
        }
    }
}
