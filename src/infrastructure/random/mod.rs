//! Random number adapter backed by the thread-local generator

use rand::Rng;

use crate::application::ports::outbound::RandomPort;

/// Production `RandomPort` using `rand::thread_rng()`
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngAdapter;

impl ThreadRngAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl RandomPort for ThreadRngAdapter {
    fn random_range(&self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        rand::thread_rng().gen_range(min..=max)
    }
}
