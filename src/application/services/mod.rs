//! Application services - Use case implementations
//!
//! Each rule lives in its own small service; `CharacterService` composes them
//! around the single character being built and is the only one that owns
//! state beyond the pending age deduction.

pub mod age_effects_service;
pub mod backstory_service;
pub mod character_service;
pub mod derived_stats_service;
pub mod dice_service;
pub mod occupation_service;
pub mod roll_service;

pub use age_effects_service::{AgeEffectsService, YOUNG_EDUCATION_PENALTY};
pub use backstory_service::BackstoryService;
pub use character_service::{
    CharacterObserver, CharacterService, CharacterServiceImpl, SubscriptionId, DEFAULT_SAVE_SLOT,
};
pub use derived_stats_service::{DerivedStatsService, MIN_MOVEMENT_RATE};
pub use dice_service::DiceService;
pub use occupation_service::OccupationService;
pub use roll_service::RollService;
