//! Characteristics - the nine core attributes of an investigator

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lowest value any ordinary characteristic may hold
pub const STAT_FLOOR: i32 = 15;
/// Lowest value for size, intelligence and education
pub const HIGH_STAT_FLOOR: i32 = 40;
/// Highest value a characteristic may be set to by hand
pub const STAT_CEILING: i32 = 90;

/// One of the nine characteristics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stat {
    #[serde(rename = "str")]
    Strength,
    #[serde(rename = "con")]
    Constitution,
    #[serde(rename = "siz")]
    Size,
    #[serde(rename = "dex")]
    Dexterity,
    #[serde(rename = "app")]
    Appearance,
    #[serde(rename = "int")]
    Intelligence,
    #[serde(rename = "pow")]
    Power,
    #[serde(rename = "edu")]
    Education,
    #[serde(rename = "luck")]
    Luck,
}

impl Stat {
    /// All characteristics in sheet order
    pub const ALL: [Stat; 9] = [
        Stat::Strength,
        Stat::Constitution,
        Stat::Size,
        Stat::Dexterity,
        Stat::Appearance,
        Stat::Intelligence,
        Stat::Power,
        Stat::Education,
        Stat::Luck,
    ];

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Constitution => "CON",
            Self::Size => "SIZ",
            Self::Dexterity => "DEX",
            Self::Appearance => "APP",
            Self::Intelligence => "INT",
            Self::Power => "POW",
            Self::Education => "EDU",
            Self::Luck => "LUCK",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Constitution => "Constitution",
            Self::Size => "Size",
            Self::Dexterity => "Dexterity",
            Self::Appearance => "Appearance",
            Self::Intelligence => "Intelligence",
            Self::Power => "Power",
            Self::Education => "Education",
            Self::Luck => "Luck",
        }
    }

    /// Minimum floor the current value is clamped to after any change
    pub fn minimum(&self) -> i32 {
        match self {
            Self::Size | Self::Intelligence | Self::Education => HIGH_STAT_FLOOR,
            _ => STAT_FLOOR,
        }
    }

    /// Rolled as (2d6+6)×5 rather than 3d6×5
    pub fn uses_education_roll(&self) -> bool {
        matches!(self, Self::Size | Self::Intelligence | Self::Education)
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// Error returned when a characteristic name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown characteristic: {0}")]
pub struct StatParseError(pub String);

impl FromStr for Stat {
    type Err = StatParseError;

    /// Accepts abbreviations ("EDU") and full names ("education"), any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "str" | "strength" => Ok(Self::Strength),
            "con" | "constitution" => Ok(Self::Constitution),
            "siz" | "size" => Ok(Self::Size),
            "dex" | "dexterity" => Ok(Self::Dexterity),
            "app" | "appearance" => Ok(Self::Appearance),
            "int" | "intelligence" => Ok(Self::Intelligence),
            "pow" | "power" => Ok(Self::Power),
            "edu" | "education" => Ok(Self::Education),
            "luck" | "lck" => Ok(Self::Luck),
            _ => Err(StatParseError(s.to_string())),
        }
    }
}

/// A full set of characteristic values
///
/// Used both for the rolled base snapshot and the modifier-adjusted current
/// values. Access by [`Stat`] goes through [`Stats::get`] / [`Stats::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    #[serde(rename = "str")]
    pub strength: i32,
    #[serde(rename = "con")]
    pub constitution: i32,
    #[serde(rename = "siz")]
    pub size: i32,
    #[serde(rename = "dex")]
    pub dexterity: i32,
    #[serde(rename = "app")]
    pub appearance: i32,
    #[serde(rename = "int")]
    pub intelligence: i32,
    #[serde(rename = "pow")]
    pub power: i32,
    #[serde(rename = "edu")]
    pub education: i32,
    pub luck: i32,
}

impl Stats {
    /// Every characteristic set to the same value
    pub fn uniform(value: i32) -> Self {
        let mut stats = Self::default();
        for stat in Stat::ALL {
            stats.set(stat, value);
        }
        stats
    }

    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Strength => self.strength,
            Stat::Constitution => self.constitution,
            Stat::Size => self.size,
            Stat::Dexterity => self.dexterity,
            Stat::Appearance => self.appearance,
            Stat::Intelligence => self.intelligence,
            Stat::Power => self.power,
            Stat::Education => self.education,
            Stat::Luck => self.luck,
        }
    }

    pub fn set(&mut self, stat: Stat, value: i32) {
        *self.get_mut(stat) = value;
    }

    pub fn get_mut(&mut self, stat: Stat) -> &mut i32 {
        match stat {
            Stat::Strength => &mut self.strength,
            Stat::Constitution => &mut self.constitution,
            Stat::Size => &mut self.size,
            Stat::Dexterity => &mut self.dexterity,
            Stat::Appearance => &mut self.appearance,
            Stat::Intelligence => &mut self.intelligence,
            Stat::Power => &mut self.power,
            Stat::Education => &mut self.education,
            Stat::Luck => &mut self.luck,
        }
    }

    pub fn with(mut self, stat: Stat, value: i32) -> Self {
        self.set(stat, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        Stat::ALL.into_iter().map(move |stat| (stat, self.get(stat)))
    }
}
