//! Domain events - Notifications of character state changes
//!
//! Every mutation of the current character publishes one event carrying the
//! full snapshot, so observers only ever need the latest one.

use chrono::{DateTime, Utc};

use crate::domain::entities::{BackstoryField, Character};
use crate::domain::value_objects::Stat;

/// Base data for all events
#[derive(Debug, Clone)]
pub struct EventMetadata {
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    /// Optional correlation ID for tracing
    pub correlation_id: Option<String>,
}

impl Default for EventMetadata {
    fn default() -> Self {
        Self {
            timestamp: Utc::now(),
            correlation_id: None,
        }
    }
}

/// What kind of change produced a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterChange {
    // ========================================================================
    // Lifecycle
    // ========================================================================
    /// A fresh investigator was rolled
    Created,

    /// A saved investigator was restored
    Loaded,

    // ========================================================================
    // Characteristics
    // ========================================================================
    /// Name or other identity details changed
    IdentityUpdated,

    /// Base characteristics were rerolled or edited
    BaseStatsChanged { stats: Vec<Stat> },

    /// An age bracket was applied
    AgeApplied { age: u32 },

    /// Age deduction points were moved on a stat
    StatDeducted { stat: Stat, amount: i32 },

    /// Improvement checks or amounts were rerolled
    ImprovementRerolled { stat: Stat },

    // ========================================================================
    // Occupation and skills
    // ========================================================================
    OccupationSet { occupation: String },

    SkillPointsAllocated { skill: String, points: i32 },

    SkillSelectionChanged { skill: String, selected: bool },

    // ========================================================================
    // Backstory
    // ========================================================================
    BackstoryUpdated { field: BackstoryField },

    /// Every backstory element was drawn at random
    BackstoryRandomized,
}

impl CharacterChange {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Created => "CharacterCreated",
            Self::Loaded => "CharacterLoaded",
            Self::IdentityUpdated => "IdentityUpdated",
            Self::BaseStatsChanged { .. } => "BaseStatsChanged",
            Self::AgeApplied { .. } => "AgeApplied",
            Self::StatDeducted { .. } => "StatDeducted",
            Self::ImprovementRerolled { .. } => "ImprovementRerolled",
            Self::OccupationSet { .. } => "OccupationSet",
            Self::SkillPointsAllocated { .. } => "SkillPointsAllocated",
            Self::SkillSelectionChanged { .. } => "SkillSelectionChanged",
            Self::BackstoryUpdated { .. } => "BackstoryUpdated",
            Self::BackstoryRandomized => "BackstoryRandomized",
        }
    }
}

/// A published character snapshot
#[derive(Debug, Clone)]
pub struct CharacterEvent {
    pub metadata: EventMetadata,
    pub change: CharacterChange,
    pub character: Character,
}

impl CharacterEvent {
    pub fn new(change: CharacterChange, character: Character) -> Self {
        Self {
            metadata: EventMetadata::default(),
            change,
            character,
        }
    }

    pub fn event_type(&self) -> &'static str {
        self.change.event_type()
    }
}
