pub mod id;
pub mod time;

use crate::domain::request_log::RequestLogSink;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ClockPort = dyn time::Clock;
pub type RequestLogIdGeneratorPort = dyn id::RequestLogIdGenerator;
pub type RequestLogSinkPort = dyn RequestLogSink;
