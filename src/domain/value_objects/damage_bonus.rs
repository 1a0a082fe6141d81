//! Damage bonus and build from the strength + size breakpoint table

use std::fmt;

use serde::{Deserialize, Serialize};

/// Damage bonus expression plus its build value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageBonus {
    pub bonus: String,
    pub build: i32,
}

impl DamageBonus {
    /// Look up the bracket for `strength + size`
    ///
    /// Sums below 2 are not reachable with legal stats and fall back to the
    /// lowest bracket.
    pub fn from_sum(sum: i32) -> Self {
        let (bonus, build) = match sum {
            i32::MIN..=64 => ("-2".to_string(), -2),
            65..=84 => ("-1".to_string(), -1),
            85..=124 => ("None".to_string(), 0),
            125..=164 => ("+1d4".to_string(), 1),
            165..=204 => ("+1d6".to_string(), 2),
            205..=284 => ("+2d6".to_string(), 3),
            285..=364 => ("+3d6".to_string(), 4),
            365..=444 => ("+4d6".to_string(), 5),
            _ => {
                let dice = (sum - 445) / 80 + 5;
                (format!("+{}d6", dice), dice)
            }
        };
        Self { bonus, build }
    }
}

impl Default for DamageBonus {
    fn default() -> Self {
        Self {
            bonus: "None".to_string(),
            build: 0,
        }
    }
}

impl fmt::Display for DamageBonus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bonus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(sum: i32) -> (String, i32) {
        let db = DamageBonus::from_sum(sum);
        (db.bonus, db.build)
    }

    #[test]
    fn test_breakpoints() {
        assert_eq!(lookup(64), ("-2".to_string(), -2));
        assert_eq!(lookup(84), ("-1".to_string(), -1));
        assert_eq!(lookup(85), ("None".to_string(), 0));
        assert_eq!(lookup(124), ("None".to_string(), 0));
        assert_eq!(lookup(125), ("+1d4".to_string(), 1));
        assert_eq!(lookup(204), ("+1d6".to_string(), 2));
        assert_eq!(lookup(205), ("+2d6".to_string(), 3));
        assert_eq!(lookup(444), ("+4d6".to_string(), 5));
    }

    #[test]
    fn test_open_ended_bracket() {
        assert_eq!(lookup(445), ("+5d6".to_string(), 5));
        assert_eq!(lookup(524), ("+5d6".to_string(), 5));
        assert_eq!(lookup(525), ("+6d6".to_string(), 6));
    }
}
