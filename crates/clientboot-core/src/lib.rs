//! clientboot core
//!
//! Startup chain for a data-access client: set up a secret provider, use it
//! to fetch the read-write and read-only connection strings, and build one
//! client for each. Every stage reports its outcome as a [`Resolved`]; a
//! failed stage short-circuits everything that depends on it, and errors
//! never cross a stage boundary.
//!
//! ## Stages
//!
//! ```rust,ignore
//! use clientboot_core::{resolve_secret_provider, resolve_clients, BootConfig, SimulatedConnector, NoOpLogger};
//!
//! let config = BootConfig::default();
//! let connector = SimulatedConnector::from_config(&config);
//!
//! let provider = resolve_secret_provider(&connector, &config, &NoOpLogger).await;
//! let clients = resolve_clients(&provider, &config, &NoOpLogger).await;
//!
//! match clients.into_result() {
//!     Ok(pair) => println!("write={} read={}", pair.write.db(), pair.read.db()),
//!     Err(failures) => eprintln!("{:?}", failures),
//! }
//! ```
//!
//! For the once-per-process form use [`bootstrap::initialize`].

pub mod types;
pub mod faults;
pub mod secrets;
pub mod logging;
pub mod config;
pub mod resolver;
pub mod bootstrap;

// Re-export commonly used types
pub use types::{
    Resolved, ErrorMessage, UNKNOWN_ERROR, is_success, is_failure,
    Client, ClientOptions, ClientPair, DataSources, ErrorFormat,
};

pub use faults::{FaultInjector, FailureWindow, InjectedFault};

pub use secrets::{
    SecretProvider, SecretConnector, SecretError, SecretResult,
    SimulatedConnector, SimulatedSecretProvider, MemoryConnector, MemorySecretProvider,
};

pub use logging::{Logger, SharedLogger, NoOpLogger, ConsoleLogger, MemoryLogger, logger_from_env};

pub use config::BootConfig;

pub use resolver::{resolve_secret_provider, resolve_clients, READ_WRITE_URL_KEY, READ_ONLY_URL_KEY};

pub use bootstrap::{Bootstrap, BootstrapError, initialize, resolved_clients};
