//! In-memory secret provider

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};

use super::traits::{SecretConnector, SecretError, SecretProvider, SecretResult};

/// In-memory secret provider for testing and embedding
///
/// Keeps secrets in memory, records every key it is asked for and can be
/// told to fail specific keys.
///
/// # Example
///
/// ```
/// use clientboot_core::secrets::MemorySecretProvider;
///
/// let provider = MemorySecretProvider::new();
/// provider.insert("readWriteUrl", "postgres://primary/app");
/// provider.fail_key("readOnlyUrl");
/// assert_eq!(provider.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemorySecretProvider {
    secrets: RwLock<HashMap<String, String>>,
    failing: RwLock<HashSet<String>>,
    requests: Mutex<Vec<String>>,
}

impl MemorySecretProvider {
    /// Create a new empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider with initial values
    pub fn with_secrets(initial: HashMap<String, String>) -> Self {
        Self {
            secrets: RwLock::new(initial),
            ..Default::default()
        }
    }

    /// Store a secret
    pub fn insert(&self, key: &str, value: &str) {
        self.secrets.write().insert(key.to_string(), value.to_string());
    }

    /// Make every retrieval of `key` fail
    pub fn fail_key(&self, key: &str) {
        self.failing.write().insert(key.to_string());
    }

    /// Keys requested so far, in order
    pub fn requested_keys(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    /// Get the number of secrets held
    pub fn len(&self) -> usize {
        self.secrets.read().len()
    }

    /// Check if the provider holds no secrets
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SecretProvider for MemorySecretProvider {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get_secret(&self, key: &str) -> SecretResult<String> {
        self.requests.lock().push(key.to_string());

        if self.failing.read().contains(key) {
            return Err(SecretError::Retrieval(key.to_string()));
        }

        self.secrets
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| SecretError::NotFound(key.to_string()))
    }
}

/// Connector handing out a shared [`MemorySecretProvider`]
///
/// Counts connects, and can be told to fail instead.
#[derive(Debug)]
pub struct MemoryConnector {
    provider: Arc<MemorySecretProvider>,
    failure: Option<String>,
    connects: AtomicUsize,
}

impl MemoryConnector {
    pub fn new(provider: Arc<MemorySecretProvider>) -> Self {
        Self {
            provider,
            failure: None,
            connects: AtomicUsize::new(0),
        }
    }

    /// A connector whose every connect fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            provider: Arc::new(MemorySecretProvider::new()),
            failure: Some(message.into()),
            connects: AtomicUsize::new(0),
        }
    }

    /// The provider this connector hands out
    pub fn provider(&self) -> &Arc<MemorySecretProvider> {
        &self.provider
    }

    /// Number of connect attempts so far
    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SecretConnector for MemoryConnector {
    fn name(&self) -> &str {
        "memory"
    }

    async fn connect(&self) -> SecretResult<Arc<dyn SecretProvider>> {
        self.connects.fetch_add(1, Ordering::SeqCst);

        match &self.failure {
            Some(message) => Err(SecretError::Other(message.clone())),
            None => {
                let provider: Arc<dyn SecretProvider> = self.provider.clone();
                Ok(provider)
            }
        }
    }
}
