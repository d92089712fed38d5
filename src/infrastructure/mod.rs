pub mod id;
pub mod sink;
pub mod telemetry;
pub mod time;

pub use id::UuidRequestLogIdGenerator;
pub use sink::TracingRequestLogSink;
pub use time::SystemClock;
