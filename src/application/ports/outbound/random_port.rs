//! Random number generation port for the rules engine.
//!
//! Every die the engine rolls goes through this port, enabling:
//! - Deterministic testing with scripted or mocked values
//! - Reproducible character builds
//! - A domain layer with no direct dependency on `rand`

use std::sync::atomic::{AtomicUsize, Ordering};

/// Random number generation abstraction.
///
/// # Implementations
///
/// - `ThreadRngAdapter` in infrastructure (production, uses `rand::thread_rng()`)
/// - `MockRandomPort` via mockall (testing)
/// - `FixedRandomPort` for deterministic testing (returns scripted values)
#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Generate a random i32 in range [min, max] (inclusive on both ends)
    fn random_range(&self, min: i32, max: i32) -> i32;
}

/// Fixed random port for deterministic testing.
///
/// Returns values from a provided sequence, cycling if needed, clamped into
/// the requested range.
#[derive(Debug)]
pub struct FixedRandomPort {
    values: Vec<i32>,
    index: AtomicUsize,
}

impl FixedRandomPort {
    /// Create a new FixedRandomPort with the given sequence of values.
    pub fn new(values: Vec<i32>) -> Self {
        assert!(!values.is_empty(), "FixedRandomPort needs at least one value");
        Self {
            values,
            index: AtomicUsize::new(0),
        }
    }

    /// Create a FixedRandomPort that always returns the same value.
    pub fn constant(value: i32) -> Self {
        Self::new(vec![value])
    }

    /// Number of values handed out so far
    pub fn draws(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }
}

impl RandomPort for FixedRandomPort {
    fn random_range(&self, min: i32, max: i32) -> i32 {
        let idx = self.index.fetch_add(1, Ordering::SeqCst);
        let value = self.values[idx % self.values.len()];
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_random_port_constant() {
        let rng = FixedRandomPort::constant(10);
        assert_eq!(rng.random_range(1, 20), 10);
        assert_eq!(rng.random_range(1, 6), 6); // Clamped to max
        assert_eq!(rng.random_range(15, 20), 15); // Clamped to min
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_fixed_random_port_sequence() {
        let rng = FixedRandomPort::new(vec![1, 5, 10, 20]);
        assert_eq!(rng.random_range(1, 20), 1);
        assert_eq!(rng.random_range(1, 20), 5);
        assert_eq!(rng.random_range(1, 20), 10);
        assert_eq!(rng.random_range(1, 20), 20);
        // Cycles back
        assert_eq!(rng.random_range(1, 20), 1);
    }
}
