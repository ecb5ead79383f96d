//! Fault injection hooks
//!
//! Simulated components take their latency from a [`Clock`] and decide
//! whether to fail from a [`RandomSource`], so tests can force either
//! branch deterministically:
//! - `TokioClock` / `InstantClock`
//! - `ThreadRandom` / `FixedRandom` / `SequenceRandom`

mod clock;
mod random;
mod injector;

pub use clock::{Clock, TokioClock, InstantClock};
pub use random::{RandomSource, ThreadRandom, FixedRandom, SequenceRandom};
pub use injector::{FaultInjector, FailureWindow, InjectedFault};
