pub mod entity;
pub mod sink;
pub mod value_objects;

pub use entity::RequestLog;
pub use sink::RequestLogSink;
pub use value_objects::RequestLogId;
