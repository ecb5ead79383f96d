//! Optional upper bound on a provider call

use std::future::Future;
use std::time::Duration;

use crate::secrets::{SecretError, SecretResult};

/// Run `call`, failing with [`SecretError::Timeout`] if `limit` elapses first
pub(crate) async fn bounded<T, F>(limit: Option<Duration>, operation: &str, call: F) -> SecretResult<T>
where
    F: Future<Output = SecretResult<T>>,
{
    match limit {
        None => call.await,
        Some(limit) => match tokio::time::timeout(limit, call).await {
            Ok(result) => result,
            Err(_) => Err(SecretError::Timeout {
                operation: operation.to_string(),
                elapsed_ms: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
            }),
        },
    }
}
