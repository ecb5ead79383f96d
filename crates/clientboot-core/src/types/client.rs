//! Data-access client handles and the options used to build them

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a client formats the errors it reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorFormat {
    #[default]
    Minimal,
    Pretty,
}

impl ErrorFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorFormat::Minimal => "minimal",
            ErrorFormat::Pretty => "pretty",
        }
    }
}

impl fmt::Display for ErrorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown error format: {0} (expected \"minimal\" or \"pretty\")")]
pub struct ParseErrorFormatError(String);

impl FromStr for ErrorFormat {
    type Err = ParseErrorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimal" => Ok(ErrorFormat::Minimal),
            "pretty" => Ok(ErrorFormat::Pretty),
            _ => Err(ParseErrorFormatError(s.to_string())),
        }
    }
}

/// Where a client connects to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSources {
    /// Connection string of the database
    pub db: String,
}

impl DataSources {
    pub fn new(db: impl Into<String>) -> Self {
        Self { db: db.into() }
    }
}

/// Input of the client factory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientOptions {
    pub error_format: ErrorFormat,
    pub datasources: DataSources,
}

impl ClientOptions {
    /// Options for `db` with the default (minimal) error format
    pub fn new(db: impl Into<String>) -> Self {
        Self {
            error_format: ErrorFormat::default(),
            datasources: DataSources::new(db),
        }
    }

    /// Set the error format
    pub fn with_error_format(mut self, error_format: ErrorFormat) -> Self {
        self.error_format = error_format;
        self
    }
}

/// Immutable data-access client handle
///
/// Built once from resolved secrets and held for the rest of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    error_format: ErrorFormat,
    datasources: DataSources,
}

impl Client {
    /// Build a client. Never fails.
    pub fn new(options: ClientOptions) -> Self {
        Self {
            error_format: options.error_format,
            datasources: options.datasources,
        }
    }

    pub fn error_format(&self) -> ErrorFormat {
        self.error_format
    }

    pub fn datasources(&self) -> &DataSources {
        &self.datasources
    }

    /// Shorthand for `datasources().db`
    pub fn db(&self) -> &str {
        &self.datasources.db
    }
}

/// The read and write clients produced by one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientPair {
    pub read: Client,
    pub write: Client,
}
