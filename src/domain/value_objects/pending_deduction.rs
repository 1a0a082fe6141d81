//! Player-allocatable age deduction budget

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Stat, StatDeduction};

/// Deduction points an age bracket asks the player to spread over some stats
///
/// `sum(used_points) <= total_points` holds after every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingDeduction {
    pub total_points: i32,
    pub stats: Vec<Stat>,
    pub used_points: BTreeMap<Stat, i32>,
}

impl PendingDeduction {
    pub fn from_bracket(deduction: &StatDeduction) -> Self {
        Self {
            total_points: deduction.total_points,
            stats: deduction.affected_stats.to_vec(),
            used_points: deduction
                .affected_stats
                .iter()
                .map(|stat| (*stat, 0))
                .collect(),
        }
    }

    pub fn used(&self) -> i32 {
        self.used_points.values().sum()
    }

    pub fn remaining(&self) -> i32 {
        self.total_points - self.used()
    }

    pub fn used_for(&self, stat: Stat) -> i32 {
        self.used_points.get(&stat).copied().unwrap_or(0)
    }

    pub fn affects(&self, stat: Stat) -> bool {
        self.stats.contains(&stat)
    }

    pub fn is_settled(&self) -> bool {
        self.remaining() == 0
    }

    pub(crate) fn record(&mut self, stat: Stat, amount: i32) {
        *self.used_points.entry(stat).or_insert(0) += amount;
    }
}
