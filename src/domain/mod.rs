pub mod errors;
pub mod request_log;
