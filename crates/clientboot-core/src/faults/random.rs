//! Injectable random draws

use std::collections::VecDeque;

use parking_lot::Mutex;
use rand::Rng;

/// Source of uniform draws in `[0, 1)`
pub trait RandomSource: Send + Sync {
    fn next_f64(&self) -> f64;
}

/// Draws from the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Always returns the same value
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_f64(&self) -> f64 {
        self.0
    }
}

/// Returns scripted values in order, then `fallback` forever
///
/// # Example
///
/// ```
/// use clientboot_core::faults::{RandomSource, SequenceRandom};
///
/// let random = SequenceRandom::new(vec![0.05], 0.5);
/// assert_eq!(random.next_f64(), 0.05);
/// assert_eq!(random.next_f64(), 0.5);
/// ```
#[derive(Debug)]
pub struct SequenceRandom {
    values: Mutex<VecDeque<f64>>,
    fallback: f64,
}

impl SequenceRandom {
    pub fn new(values: impl IntoIterator<Item = f64>, fallback: f64) -> Self {
        Self {
            values: Mutex::new(values.into_iter().collect()),
            fallback,
        }
    }

    /// Number of scripted values not yet drawn
    pub fn remaining(&self) -> usize {
        self.values.lock().len()
    }
}

impl RandomSource for SequenceRandom {
    fn next_f64(&self) -> f64 {
        self.values.lock().pop_front().unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_random_range() {
        for _ in 0..1000 {
            let x = ThreadRandom.next_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_sequence_random() {
        let random = SequenceRandom::new(vec![0.1, 0.2], 0.9);
        assert_eq!(random.remaining(), 2);
        assert_eq!(random.next_f64(), 0.1);
        assert_eq!(random.next_f64(), 0.2);
        assert_eq!(random.remaining(), 0);
        assert_eq!(random.next_f64(), 0.9);
        assert_eq!(random.next_f64(), 0.9);
    }
}
