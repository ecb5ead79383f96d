//! Injectable waiting

use std::time::Duration;

use async_trait::async_trait;

/// Source of simulated latency
#[async_trait]
pub trait Clock: Send + Sync {
    /// Wait for `duration`
    async fn sleep(&self, duration: Duration);
}

/// Real timer backed by `tokio::time`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Clock that never waits
///
/// Still yields to the scheduler so callers keep their suspension points.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantClock;

#[async_trait]
impl Clock for InstantClock {
    async fn sleep(&self, _duration: Duration) {
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_tokio_clock_waits() {
        let start = Instant::now();
        TokioClock.sleep(Duration::from_secs(3)).await;
        assert!(start.elapsed() >= Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_instant_clock_does_not_wait() {
        let start = Instant::now();
        InstantClock.sleep(Duration::from_secs(3)).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
