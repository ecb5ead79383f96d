//! Console logger implementation

use super::file_logger::LogLevel;
use super::traits::Logger;

/// A logger that writes every level to stderr
///
/// Stdout is reserved for the entry point's report.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a new console logger with default prefix
    pub fn new() -> Self {
        Self {
            prefix: "[clientboot]".to_string(),
        }
    }

    fn line(&self, level: LogLevel, message: &str) -> String {
        format!("{} {}: {}", self.prefix, level.to_string().trim_end(), message)
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        eprintln!("{}", self.line(LogLevel::Debug, message));
    }

    fn info(&self, message: &str) {
        eprintln!("{}", self.line(LogLevel::Info, message));
    }

    fn warn(&self, message: &str) {
        eprintln!("{}", self.line(LogLevel::Warn, message));
    }

    fn error(&self, message: &str) {
        eprintln!("{}", self.line(LogLevel::Error, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_line_format() {
        let logger = ConsoleLogger::new();
        assert_eq!(logger.prefix, "[clientboot]");

        assert_eq!(
            logger.line(LogLevel::Info, "Read and write clients ready"),
            "[clientboot] INFO: Read and write clients ready"
        );
        assert_eq!(
            logger.line(LogLevel::Error, "Client setup failed: vault sealed"),
            "[clientboot] ERROR: Client setup failed: vault sealed"
        );
    }
}
