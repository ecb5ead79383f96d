//! Second stage: fetch connection strings and build the clients

use std::sync::Arc;

use super::timeout::bounded;
use crate::config::BootConfig;
use crate::logging::Logger;
use crate::secrets::{SecretProvider, SecretResult};
use crate::types::{Client, ClientOptions, ClientPair, Resolved};

/// Secret holding the read-write connection string
pub const READ_WRITE_URL_KEY: &str = "readWriteUrl";

/// Secret holding the read-only connection string
pub const READ_ONLY_URL_KEY: &str = "readOnlyUrl";

/// Build the read and write clients on top of a provider outcome
///
/// An upstream failure is forwarded verbatim without touching the provider.
/// Otherwise `readWriteUrl` then `readOnlyUrl` are fetched in order; the
/// first fetch error (or elapsed timeout) ends the stage with a
/// single-message failure and no clients.
pub async fn resolve_clients(
    provider: &Resolved<Arc<dyn SecretProvider>>,
    config: &BootConfig,
    logger: &dyn Logger,
) -> Resolved<ClientPair> {
    let provider = match provider {
        Resolved::Success(provider) => provider,
        Resolved::Failure(failures) => {
            logger.warn("Skipping client setup: secret provider unavailable");
            return Resolved::from_failures(failures.clone());
        }
    };

    match build_clients(&**provider, config, logger).await {
        Ok(clients) => {
            logger.info("Read and write clients ready");
            Resolved::success(clients)
        }
        Err(e) => {
            logger.error(&format!("Client setup failed: {}", e));
            Resolved::from_error(&e)
        }
    }
}

async fn build_clients(
    provider: &dyn SecretProvider,
    config: &BootConfig,
    logger: &dyn Logger,
) -> SecretResult<ClientPair> {
    let read_write_url = fetch(provider, READ_WRITE_URL_KEY, config, logger).await?;
    let read_only_url = fetch(provider, READ_ONLY_URL_KEY, config, logger).await?;

    let write = Client::new(ClientOptions::new(read_write_url).with_error_format(config.error_format));
    let read = Client::new(ClientOptions::new(read_only_url).with_error_format(config.error_format));

    Ok(ClientPair { read, write })
}

async fn fetch(
    provider: &dyn SecretProvider,
    key: &str,
    config: &BootConfig,
    logger: &dyn Logger,
) -> SecretResult<String> {
    logger.debug(&format!("Fetching secret {} from '{}'", key, provider.name()));
    let operation = format!("Secret retrieval for {}", key);
    bounded(config.timeout, &operation, provider.get_secret(key)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faults::{FaultInjector, FailureWindow, InstantClock, SequenceRandom};
    use crate::logging::{MemoryLogger, NoOpLogger};
    use crate::secrets::{MemorySecretProvider, SecretConnector, SimulatedConnector};
    use crate::types::ErrorFormat;
    use std::time::Duration;

    fn memory_provider() -> Arc<MemorySecretProvider> {
        let provider = Arc::new(MemorySecretProvider::new());
        provider.insert(READ_WRITE_URL_KEY, "secret:readWriteUrl");
        provider.insert(READ_ONLY_URL_KEY, "secret:readOnlyUrl");
        provider
    }

    fn resolved(provider: &Arc<MemorySecretProvider>) -> Resolved<Arc<dyn SecretProvider>> {
        let provider: Arc<dyn SecretProvider> = provider.clone();
        Resolved::success(provider)
    }

    #[tokio::test]
    async fn test_both_fetches_succeed() {
        let provider = memory_provider();
        let clients = resolve_clients(&resolved(&provider), &BootConfig::instant(), &NoOpLogger)
            .await
            .into_result()
            .unwrap();

        assert_eq!(clients.write.db(), "secret:readWriteUrl");
        assert_eq!(clients.read.db(), "secret:readOnlyUrl");
        assert_eq!(clients.write.error_format(), ErrorFormat::Minimal);
        assert_eq!(clients.read.error_format(), ErrorFormat::Minimal);
        assert_eq!(provider.requested_keys(), vec![READ_WRITE_URL_KEY, READ_ONLY_URL_KEY]);
    }

    #[tokio::test]
    async fn test_upstream_failure_forwarded_verbatim() {
        let upstream: Resolved<Arc<dyn SecretProvider>> = Resolved::from_failures(vec![
            "SecretsManager initialization timed out".to_string(),
            "second upstream note".to_string(),
        ]);
        let logger = MemoryLogger::new();

        let result = resolve_clients(&upstream, &BootConfig::instant(), &logger).await;

        assert_eq!(
            result.failures().unwrap(),
            upstream.failures().unwrap()
        );
        assert!(logger.contains("Skipping client setup"));
    }

    #[tokio::test]
    async fn test_write_fetch_failure_skips_read_fetch() {
        let provider = memory_provider();
        provider.fail_key(READ_WRITE_URL_KEY);

        let result = resolve_clients(&resolved(&provider), &BootConfig::instant(), &NoOpLogger).await;

        assert_eq!(
            result.failures().unwrap(),
            ["Secret retrieval failed for readWriteUrl"]
        );
        assert_eq!(provider.requested_keys(), vec![READ_WRITE_URL_KEY]);
    }

    #[tokio::test]
    async fn test_read_fetch_failure_discards_write_client() {
        let provider = memory_provider();
        provider.fail_key(READ_ONLY_URL_KEY);

        let result = resolve_clients(&resolved(&provider), &BootConfig::instant(), &NoOpLogger).await;

        assert!(result.is_failure());
        assert!(result.value().is_none());
        assert_eq!(
            result.failures().unwrap(),
            ["Secret retrieval failed for readOnlyUrl"]
        );
        assert_eq!(provider.requested_keys(), vec![READ_WRITE_URL_KEY, READ_ONLY_URL_KEY]);
    }

    #[tokio::test]
    async fn test_missing_secret_is_a_failure() {
        let provider = Arc::new(MemorySecretProvider::new());
        let result = resolve_clients(&resolved(&provider), &BootConfig::instant(), &NoOpLogger).await;

        assert_eq!(result.failures().unwrap(), ["Secret not found: readWriteUrl"]);
    }

    #[tokio::test]
    async fn test_error_format_from_config() {
        let provider = memory_provider();
        let config = BootConfig::instant().with_error_format(ErrorFormat::Pretty);

        let clients = resolve_clients(&resolved(&provider), &config, &NoOpLogger)
            .await
            .into_result()
            .unwrap();

        assert_eq!(clients.write.error_format(), ErrorFormat::Pretty);
        assert_eq!(clients.read.error_format(), ErrorFormat::Pretty);
    }

    #[tokio::test]
    async fn test_simulated_second_fetch_fault() {
        // Draws: connect ok, write fetch ok, read fetch fails
        let faults = Arc::new(FaultInjector::new(
            Arc::new(InstantClock),
            Arc::new(SequenceRandom::new(vec![0.5, 0.5, 0.05], 0.5)),
            FailureWindow::DEFAULT,
        ));
        let config = BootConfig::instant();
        let provider = SimulatedConnector::with_faults(&config, faults)
            .connect()
            .await
            .unwrap();

        let result = resolve_clients(&Resolved::success(provider), &config, &NoOpLogger).await;

        assert_eq!(
            result.failures().unwrap(),
            ["Secret retrieval failed for readOnlyUrl"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_timeout() {
        use crate::faults::{FixedRandom, TokioClock};

        let faults = Arc::new(FaultInjector::new(
            Arc::new(TokioClock),
            Arc::new(FixedRandom(0.5)),
            FailureWindow::DEFAULT,
        ));
        let config = BootConfig::default()
            .with_init_latency(Duration::ZERO)
            .with_timeout(Duration::from_millis(1500));
        let provider = SimulatedConnector::with_faults(&config, faults)
            .connect()
            .await
            .unwrap();

        let result = resolve_clients(&Resolved::success(provider), &config, &NoOpLogger).await;

        assert_eq!(
            result.failures().unwrap(),
            ["Secret retrieval for readWriteUrl timed out after 1500ms"]
        );
    }
}
