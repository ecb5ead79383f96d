//! Simulated secrets manager
//!
//! Stands in for a remote secrets service: every call waits for simulated
//! latency and then may fail, and every key resolves to `secret:{key}`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::traits::{SecretConnector, SecretProvider, SecretResult};
use crate::config::BootConfig;
use crate::debug_log;
use crate::faults::FaultInjector;

/// Descriptor of the injected setup failure
pub const INIT_FAILURE: &str = "SecretsManager initialization timed out";

/// Placeholder value a simulated provider returns for `key`
pub fn placeholder_secret(key: &str) -> String {
    format!("secret:{}", key)
}

/// Provider returned by [`SimulatedConnector::connect`]
#[derive(Debug)]
pub struct SimulatedSecretProvider {
    faults: Arc<FaultInjector>,
    fetch_latency: Duration,
}

impl SimulatedSecretProvider {
    pub fn new(faults: Arc<FaultInjector>, fetch_latency: Duration) -> Self {
        Self { faults, fetch_latency }
    }
}

#[async_trait]
impl SecretProvider for SimulatedSecretProvider {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn get_secret(&self, key: &str) -> SecretResult<String> {
        self.faults.delay(self.fetch_latency).await;
        self.faults
            .check(&format!("Secret retrieval failed for {}", key))?;

        debug_log!("resolved secret {}", key);
        Ok(placeholder_secret(key))
    }
}

/// Sets up a [`SimulatedSecretProvider`] after simulated latency
#[derive(Debug)]
pub struct SimulatedConnector {
    faults: Arc<FaultInjector>,
    init_latency: Duration,
    fetch_latency: Duration,
}

impl SimulatedConnector {
    pub fn new(faults: Arc<FaultInjector>, init_latency: Duration, fetch_latency: Duration) -> Self {
        Self {
            faults,
            init_latency,
            fetch_latency,
        }
    }

    /// Latencies from `config`, real timers and RNG
    pub fn from_config(config: &BootConfig) -> Self {
        Self::with_faults(config, Arc::new(FaultInjector::system(config.failure_window)))
    }

    /// Latencies from `config`, caller-supplied fault hooks
    pub fn with_faults(config: &BootConfig, faults: Arc<FaultInjector>) -> Self {
        Self::new(faults, config.init_latency, config.fetch_latency)
    }
}

#[async_trait]
impl SecretConnector for SimulatedConnector {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn connect(&self) -> SecretResult<Arc<dyn SecretProvider>> {
        self.faults.delay(self.init_latency).await;
        self.faults.check(INIT_FAILURE)?;

        debug_log!("simulated secrets manager ready");
        let provider: Arc<dyn SecretProvider> = Arc::new(SimulatedSecretProvider::new(
            Arc::clone(&self.faults),
            self.fetch_latency,
        ));
        Ok(provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faults::{FailureWindow, FixedRandom, InstantClock, SequenceRandom, TokioClock};
    use tokio::time::Instant;

    fn faults(random: impl crate::faults::RandomSource + 'static) -> Arc<FaultInjector> {
        Arc::new(FaultInjector::new(
            Arc::new(InstantClock),
            Arc::new(random),
            FailureWindow::DEFAULT,
        ))
    }

    fn connector(random: impl crate::faults::RandomSource + 'static) -> SimulatedConnector {
        SimulatedConnector::with_faults(&BootConfig::instant(), faults(random))
    }

    #[tokio::test]
    async fn test_connect_and_fetch() {
        let provider = connector(FixedRandom(0.5)).connect().await.unwrap();
        assert_eq!(provider.name(), "simulated");
        assert_eq!(provider.get_secret("readWriteUrl").await.unwrap(), "secret:readWriteUrl");
        assert_eq!(provider.get_secret("readOnlyUrl").await.unwrap(), "secret:readOnlyUrl");
    }

    #[tokio::test]
    async fn test_connect_fault() {
        let err = connector(FixedRandom(0.05)).connect().await.unwrap_err();
        assert_eq!(err.to_string(), "SecretsManager initialization timed out");
    }

    #[tokio::test]
    async fn test_fetch_fault_names_key() {
        // First draw is the connect check, second the fetch check
        let provider = connector(SequenceRandom::new(vec![0.5, 0.1], 0.5))
            .connect()
            .await
            .unwrap();

        let err = provider.get_secret("readOnlyUrl").await.unwrap_err();
        assert_eq!(err.to_string(), "Secret retrieval failed for readOnlyUrl");

        // Failures are per call, not sticky
        assert!(provider.get_secret("readOnlyUrl").await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_applies_before_each_step() {
        let faults = Arc::new(FaultInjector::new(
            Arc::new(TokioClock),
            Arc::new(FixedRandom(0.5)),
            FailureWindow::DEFAULT,
        ));
        let connector = SimulatedConnector::with_faults(&BootConfig::default(), faults);

        let start = Instant::now();
        let provider = connector.connect().await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(3));

        provider.get_secret("readWriteUrl").await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(6));
    }
}
