//! Logging for the initialization stages

mod traits;
mod console;
mod memory;
pub mod file_logger;

use std::sync::Arc;

pub use traits::{Logger, SharedLogger, NoOpLogger};
pub use console::ConsoleLogger;
pub use memory::MemoryLogger;

pub use file_logger::LogLevel;

/// Console logger when `CLIENTBOOT_VERBOSE` is set, silent otherwise
pub fn logger_from_env() -> SharedLogger {
    match std::env::var("CLIENTBOOT_VERBOSE") {
        Ok(v) if !v.is_empty() && v != "0" => Arc::new(ConsoleLogger::new()),
        _ => NoOpLogger::shared(),
    }
}
