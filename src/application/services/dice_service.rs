//! Dice Service - die rolls and characteristic generation

use std::sync::Arc;

use crate::application::ports::outbound::RandomPort;
use crate::domain::value_objects::{Stat, Stats};

/// Stateless dice roller over an injected random source
#[derive(Clone)]
pub struct DiceService {
    rng: Arc<dyn RandomPort>,
}

impl DiceService {
    pub fn new(rng: Arc<dyn RandomPort>) -> Self {
        Self { rng }
    }

    /// Uniform integer in [1, sides]
    pub fn roll_die(&self, sides: i32) -> i32 {
        self.rng.random_range(1, sides.max(1))
    }

    /// Sum of `count` independent dice
    pub fn roll_dice(&self, count: u32, sides: i32) -> i32 {
        (0..count).map(|_| self.roll_die(sides)).sum()
    }

    pub fn roll_1d10(&self) -> i32 {
        self.roll_die(10)
    }

    pub fn roll_1d100(&self) -> i32 {
        self.roll_dice(1, 100)
    }

    pub fn roll_2d6(&self) -> i32 {
        self.roll_dice(2, 6)
    }

    pub fn roll_3d6(&self) -> i32 {
        self.roll_dice(3, 6)
    }

    /// 3d6 × 5
    pub fn roll_statistic(&self) -> i32 {
        self.roll_3d6() * 5
    }

    /// (2d6 + 6) × 5, used for size, intelligence and education
    pub fn roll_education(&self) -> i32 {
        (self.roll_2d6() + 6) * 5
    }

    /// Roll one characteristic with the method its rules call for
    pub fn roll_stat(&self, stat: Stat) -> i32 {
        if stat.uses_education_roll() {
            self.roll_education()
        } else {
            self.roll_statistic()
        }
    }

    /// A complete set of rolled characteristics, in sheet order
    pub fn generate_base_stats(&self) -> Stats {
        let mut stats = Stats::default();
        for stat in Stat::ALL {
            stats.set(stat, self.roll_stat(stat));
        }
        stats
    }

    /// Uniform index into a table of `len` entries
    pub fn pick_index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let sides = i32::try_from(len).unwrap_or(i32::MAX);
        Some((self.roll_die(sides) - 1) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::{FixedRandomPort, MockRandomPort};
    use crate::infrastructure::random::ThreadRngAdapter;

    fn fixed(values: Vec<i32>) -> DiceService {
        DiceService::new(Arc::new(FixedRandomPort::new(values)))
    }

    #[test]
    fn test_roll_die_asks_for_inclusive_range() {
        let mut mock = MockRandomPort::new();
        mock.expect_random_range()
            .withf(|min, max| *min == 1 && *max == 100)
            .times(1)
            .return_const(42);

        let dice = DiceService::new(Arc::new(mock));
        assert_eq!(dice.roll_1d100(), 42);
    }

    #[test]
    fn test_combinations_sum_dice() {
        let dice = fixed(vec![2, 3, 4]);
        assert_eq!(dice.roll_3d6(), 9);
        assert_eq!(dice.roll_statistic(), 45);

        let dice = fixed(vec![6, 6]);
        assert_eq!(dice.roll_2d6(), 12);
        assert_eq!(dice.roll_education(), 90);
    }

    #[test]
    fn test_generate_base_stats_uses_two_methods() {
        let dice = fixed(vec![1]);
        let stats = dice.generate_base_stats();

        // 3d6 of ones = 3 * 5; (2d6 of ones + 6) * 5 = 40
        assert_eq!(stats.strength, 15);
        assert_eq!(stats.luck, 15);
        assert_eq!(stats.size, 40);
        assert_eq!(stats.intelligence, 40);
        assert_eq!(stats.education, 40);
    }

    #[test]
    fn test_thread_rng_stats_in_legal_ranges() {
        let dice = DiceService::new(Arc::new(ThreadRngAdapter::new()));
        for _ in 0..200 {
            let stats = dice.generate_base_stats();
            for (stat, value) in stats.iter() {
                assert!(value % 5 == 0, "{} = {} not a multiple of 5", stat, value);
                assert!(value >= stat.minimum() && value <= 90, "{} = {} out of range", stat, value);
            }
            let d10 = dice.roll_1d10();
            assert!((1..=10).contains(&d10));
        }
    }

    #[test]
    fn test_pick_index() {
        let dice = fixed(vec![3]);
        assert_eq!(dice.pick_index(5), Some(2));
        assert_eq!(dice.pick_index(0), None);
    }
}
