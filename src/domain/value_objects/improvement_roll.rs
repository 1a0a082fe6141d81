//! Improvement check records

use serde::{Deserialize, Serialize};

/// Outcome of one d100-vs-characteristic improvement check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementRoll {
    /// The d100 result
    pub check: i32,
    /// Characteristic value at the time of the roll
    pub target: i32,
    /// True when the d100 exceeded the target
    pub success: bool,
    /// d10 gain, present only on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvement: Option<i32>,
}

impl ImprovementRoll {
    pub fn gained(&self) -> i32 {
        self.improvement.unwrap_or(0)
    }
}

/// Every check made in one batch, plus their summed gain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementCheckOutcome {
    pub rolls: Vec<ImprovementRoll>,
    pub total_improvement: i32,
}
