//! Core traits and types for secret providers

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::faults::InjectedFault;

/// Errors that can occur while connecting to or reading from a provider
#[derive(Error, Debug)]
pub enum SecretError {
    /// Simulated failure; displays as its descriptor only
    #[error(transparent)]
    Fault(#[from] InjectedFault),

    #[error("Secret retrieval failed for {0}")]
    Retrieval(String),

    #[error("Secret not found: {0}")]
    NotFound(String),

    #[error("{operation} timed out after {elapsed_ms}ms")]
    Timeout { operation: String, elapsed_ms: u64 },

    #[error("{0}")]
    Other(String),
}

pub type SecretResult<T> = Result<T, SecretError>;

/// Resolves named secrets, asynchronously and fallibly
///
/// # Example
///
/// ```
/// use clientboot_core::secrets::{MemorySecretProvider, SecretProvider};
///
/// # block_on(async {
/// let provider = MemorySecretProvider::new();
/// provider.insert("readWriteUrl", "postgres://primary/app");
/// assert_eq!(provider.get_secret("readWriteUrl").await.unwrap(), "postgres://primary/app");
/// # });
/// # fn block_on<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
#[async_trait]
pub trait SecretProvider: Send + Sync {
    /// Human-readable name of this provider
    fn name(&self) -> &str;

    /// Retrieve a secret by key
    async fn get_secret(&self, key: &str) -> SecretResult<String>;
}

impl std::fmt::Debug for dyn SecretProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretProvider")
            .field("name", &self.name())
            .finish()
    }
}

/// One-shot, fallible setup of a [`SecretProvider`]
#[async_trait]
pub trait SecretConnector: Send + Sync {
    /// Human-readable name of the provider this connector builds
    fn name(&self) -> &str;

    /// Set up the provider
    async fn connect(&self) -> SecretResult<Arc<dyn SecretProvider>>;
}
