//! First stage: set up the secret provider

use std::sync::Arc;

use super::timeout::bounded;
use crate::config::BootConfig;
use crate::logging::Logger;
use crate::secrets::{SecretConnector, SecretProvider};
use crate::types::Resolved;

/// Connect to the secret provider
///
/// Any error from `connector` (including an elapsed `config.timeout`)
/// becomes a single-message failure here and goes no further.
pub async fn resolve_secret_provider(
    connector: &dyn SecretConnector,
    config: &BootConfig,
    logger: &dyn Logger,
) -> Resolved<Arc<dyn SecretProvider>> {
    logger.debug(&format!("Connecting to secret provider '{}'", connector.name()));

    let operation = format!("Secret provider '{}' setup", connector.name());
    match bounded(config.timeout, &operation, connector.connect()).await {
        Ok(provider) => {
            logger.info(&format!("Secret provider '{}' ready", provider.name()));
            Resolved::success(provider)
        }
        Err(e) => {
            logger.error(&format!("Secret provider setup failed: {}", e));
            Resolved::from_error(&e)
        }
    }
}
