//! Occupation skill-point formulas such as "EDU × 2 + APP × 2"

use std::fmt;

use thiserror::Error;

use super::{Stat, Stats};

const MULTIPLY_SIGNS: [char; 2] = ['×', '*'];

/// Error when parsing a skill-point formula
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    #[error("Empty skill point formula")]
    Empty,
    #[error("Missing multiplier in term: '{0}'")]
    MissingMultiplier(String),
    #[error("Invalid multiplier in term: '{0}'")]
    InvalidMultiplier(String),
    #[error("Unknown characteristic in term: '{0}'")]
    UnknownStat(String),
}

/// One `STAT × N` term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormulaTerm {
    pub stat: Stat,
    pub multiplier: i32,
}

/// A validated `STAT × N [+ STAT × N]*` formula
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillPointFormula {
    pub terms: Vec<FormulaTerm>,
}

impl SkillPointFormula {
    /// Strict parse, used to validate reference data when it is loaded
    pub fn parse(input: &str) -> Result<Self, FormulaError> {
        if input.trim().is_empty() {
            return Err(FormulaError::Empty);
        }

        let terms = input
            .split('+')
            .map(|raw| {
                let term = raw.trim();
                let (stat, multiplier) = term
                    .split_once(MULTIPLY_SIGNS)
                    .ok_or_else(|| FormulaError::MissingMultiplier(term.to_string()))?;
                let stat = stat
                    .parse::<Stat>()
                    .map_err(|_| FormulaError::UnknownStat(term.to_string()))?;
                let multiplier = multiplier
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| FormulaError::InvalidMultiplier(term.to_string()))?;
                Ok(FormulaTerm { stat, multiplier })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { terms })
    }

    pub fn evaluate(&self, stats: &Stats) -> i32 {
        self.terms
            .iter()
            .map(|t| stats.get(t.stat) * t.multiplier)
            .sum()
    }

    /// Evaluate a formula string without validation
    ///
    /// Formulas come from static reference data. A term whose stat or
    /// multiplier cannot be read contributes zero.
    pub fn evaluate_trusted(formula: &str, stats: &Stats) -> i32 {
        formula
            .split('+')
            .filter_map(|term| {
                let (stat, multiplier) = term.split_once(MULTIPLY_SIGNS)?;
                let stat = stat.parse::<Stat>().ok()?;
                let multiplier = multiplier.trim().parse::<i32>().ok()?;
                Some(stats.get(stat) * multiplier)
            })
            .sum()
    }
}

impl fmt::Display for SkillPointFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .terms
            .iter()
            .map(|t| format!("{} × {}", t.stat.abbreviation(), t.multiplier))
            .collect();
        f.write_str(&rendered.join(" + "))
    }
}
