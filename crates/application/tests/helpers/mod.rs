#![allow(dead_code, unused_imports)]

pub mod log_capture;
pub mod mock_handlers;

pub use log_capture::{capture_logs, CapturedLogs};
pub use mock_handlers::{MockNextHandler, RecordingWriter};
