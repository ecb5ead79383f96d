//! Memoized startup chain
//!
//! A [`Bootstrap`] runs each stage at most once and keeps its outcome for the
//! rest of its life. The process-wide instance is installed by the first call
//! to [`initialize`]; [`resolved_clients`] reads it back afterwards.
//!
//! ```rust,ignore
//! use clientboot_core::{bootstrap, BootConfig, Bootstrap, logger_from_env};
//!
//! let clients = bootstrap::initialize(Bootstrap::new(BootConfig::default(), logger_from_env())).await;
//! if let Some(pair) = clients.value() {
//!     println!("{}", pair.write.db());
//! }
//! ```

use std::sync::Arc;

use once_cell::sync::OnceCell as GlobalCell;
use thiserror::Error;
use tokio::sync::OnceCell;

use crate::config::BootConfig;
use crate::logging::SharedLogger;
use crate::resolver::{resolve_clients, resolve_secret_provider};
use crate::secrets::{SecretConnector, SecretProvider, SimulatedConnector};
use crate::types::{ClientPair, Resolved};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BootstrapError {
    #[error("initialize() has not been called")]
    NotInitialized,

    #[error("initialize() has not finished resolving clients")]
    NotResolved,
}

/// Owns the stage outcomes for one startup
pub struct Bootstrap {
    config: BootConfig,
    connector: Arc<dyn SecretConnector>,
    logger: SharedLogger,
    secret_provider: OnceCell<Resolved<Arc<dyn SecretProvider>>>,
    clients: OnceCell<Resolved<ClientPair>>,
}

impl Bootstrap {
    /// Simulated secrets manager with real timers and RNG
    pub fn new(config: BootConfig, logger: SharedLogger) -> Self {
        let connector = Arc::new(SimulatedConnector::from_config(&config));
        Self::with_connector(config, connector, logger)
    }

    /// Any secret connector
    pub fn with_connector(
        config: BootConfig,
        connector: Arc<dyn SecretConnector>,
        logger: SharedLogger,
    ) -> Self {
        Self {
            config,
            connector,
            logger,
            secret_provider: OnceCell::new(),
            clients: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &BootConfig {
        &self.config
    }

    /// Outcome of the provider stage, computed on first call
    pub async fn secret_provider(&self) -> &Resolved<Arc<dyn SecretProvider>> {
        self.secret_provider
            .get_or_init(|| async {
                resolve_secret_provider(self.connector.as_ref(), &self.config, self.logger.as_ref()).await
            })
            .await
    }

    /// Outcome of the client stage, computed on first call
    ///
    /// Resolves the provider stage first if needed.
    pub async fn clients(&self) -> &Resolved<ClientPair> {
        self.clients
            .get_or_init(|| async {
                let provider = self.secret_provider().await;
                resolve_clients(provider, &self.config, self.logger.as_ref()).await
            })
            .await
    }

    /// Client outcome if already computed; never starts work
    pub fn resolved_clients(&self) -> Option<&Resolved<ClientPair>> {
        self.clients.get()
    }
}

impl std::fmt::Debug for Bootstrap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bootstrap")
            .field("config", &self.config)
            .field("connector", &self.connector.name())
            .field("logger", &self.logger)
            .field("secret_provider", &self.secret_provider.get())
            .field("clients", &self.clients.get())
            .finish()
    }
}

/// Process-wide bootstrap
static GLOBAL: GlobalCell<Bootstrap> = GlobalCell::new();

/// Install `bootstrap` (first caller wins) and resolve the clients
///
/// Later calls ignore their argument and return the cached outcome.
pub async fn initialize(bootstrap: Bootstrap) -> &'static Resolved<ClientPair> {
    let installed = GLOBAL.get_or_init(|| bootstrap);
    installed.clients().await
}

/// The cached client outcome of the process-wide bootstrap
pub fn resolved_clients() -> Result<&'static Resolved<ClientPair>, BootstrapError> {
    GLOBAL
        .get()
        .ok_or(BootstrapError::NotInitialized)?
        .resolved_clients()
        .ok_or(BootstrapError::NotResolved)
}
