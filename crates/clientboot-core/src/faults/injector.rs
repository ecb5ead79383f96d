//! Simulated latency and probabilistic failure

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use super::clock::{Clock, TokioClock};
use super::random::{RandomSource, ThreadRandom};
use crate::trace_log;

/// Open interval of draws that count as a failure
///
/// A draw `x` fails when `lower < x < upper`. Both bounds are excluded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FailureWindow {
    lower: f64,
    upper: f64,
}

impl FailureWindow {
    /// `(0.01, 0.11)`: roughly one draw in ten fails, the lowest 1% never does
    pub const DEFAULT: FailureWindow = FailureWindow { lower: 0.01, upper: 0.11 };

    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// A window no draw in `[0, 1)` falls into
    pub fn never() -> Self {
        Self { lower: 0.0, upper: 0.0 }
    }

    /// A window every draw in `[0, 1)` falls into
    pub fn always() -> Self {
        Self { lower: -1.0, upper: 1.0 }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn contains(&self, draw: f64) -> bool {
        draw > self.lower && draw < self.upper
    }
}

impl Default for FailureWindow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A failure produced by [`FaultInjector::check`]
///
/// Displays as its descriptor, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{descriptor}")]
pub struct InjectedFault {
    descriptor: String,
}

impl InjectedFault {
    pub fn new(descriptor: impl Into<String>) -> Self {
        Self {
            descriptor: descriptor.into(),
        }
    }

    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }
}

/// Pluggable latency and fault hooks shared by simulated components
pub struct FaultInjector {
    clock: Arc<dyn Clock>,
    random: Arc<dyn RandomSource>,
    window: FailureWindow,
}

impl FaultInjector {
    pub fn new(clock: Arc<dyn Clock>, random: Arc<dyn RandomSource>, window: FailureWindow) -> Self {
        Self { clock, random, window }
    }

    /// Real timers and the thread RNG
    pub fn system(window: FailureWindow) -> Self {
        Self::new(Arc::new(TokioClock), Arc::new(ThreadRandom), window)
    }

    pub fn window(&self) -> FailureWindow {
        self.window
    }

    /// Wait for simulated latency
    pub async fn delay(&self, duration: Duration) {
        if duration.is_zero() {
            return;
        }
        self.clock.sleep(duration).await;
    }

    /// Draw once and fail with `descriptor` if the draw lands in the window
    pub fn check(&self, descriptor: &str) -> Result<(), InjectedFault> {
        let draw = self.random.next_f64();
        if self.window.contains(draw) {
            trace_log!("injected fault (draw {:.4}): {}", draw, descriptor);
            return Err(InjectedFault::new(descriptor));
        }
        Ok(())
    }
}

impl std::fmt::Debug for FaultInjector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaultInjector")
            .field("window", &self.window)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faults::{FixedRandom, InstantClock, SequenceRandom};

    fn injector(random: impl RandomSource + 'static) -> FaultInjector {
        FaultInjector::new(Arc::new(InstantClock), Arc::new(random), FailureWindow::DEFAULT)
    }

    #[test]
    fn test_default_window_bounds_are_exclusive() {
        let window = FailureWindow::DEFAULT;
        assert!(!window.contains(0.0));
        assert!(!window.contains(0.005));
        assert!(!window.contains(0.01));
        assert!(window.contains(0.010_001));
        assert!(window.contains(0.05));
        assert!(window.contains(0.109_999));
        assert!(!window.contains(0.11));
        assert!(!window.contains(0.5));
    }

    #[test]
    fn test_never_and_always() {
        for draw in [0.0, 0.05, 0.5, 0.999] {
            assert!(!FailureWindow::never().contains(draw));
            assert!(FailureWindow::always().contains(draw));
        }
    }

    #[test]
    fn test_check_fails_inside_window() {
        let err = injector(FixedRandom(0.05))
            .check("SecretsManager initialization timed out")
            .unwrap_err();
        assert_eq!(err.to_string(), "SecretsManager initialization timed out");
        assert_eq!(err.descriptor(), "SecretsManager initialization timed out");
    }

    #[test]
    fn test_check_passes_outside_window() {
        assert!(injector(FixedRandom(0.5)).check("unused").is_ok());
        assert!(injector(FixedRandom(0.005)).check("unused").is_ok());
    }

    #[test]
    fn test_check_draws_once_per_call() {
        let faults = injector(SequenceRandom::new(vec![0.5, 0.05], 0.5));
        assert!(faults.check("first").is_ok());
        assert!(faults.check("second").is_err());
        assert!(faults.check("third").is_ok());
    }
}
