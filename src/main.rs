//! Investigator Builder - command line driver
//!
//! Usage: `investigator-builder [NAME] [AGE] [OCCUPATION]`
//!
//! Restores the saved investigator (or rolls a new one), applies the given
//! name, age and occupation, spends what is left of the age deduction and the
//! occupation skill points, fills any missing backstory, saves, and prints the
//! character sheet as JSON.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use investigator_builder::application::services::{CharacterService, CharacterServiceImpl};
use investigator_builder::domain::entities::CREDIT_RATING;
use investigator_builder::infrastructure::config::AppConfig;
use investigator_builder::infrastructure::persistence::JsonFileStorage;
use investigator_builder::infrastructure::random::ThreadRngAdapter;
use investigator_builder::infrastructure::reference_data;

/// Highest total the driver raises a skill to when spending points
const SKILL_SPEND_CAP: i32 = 70;
const SKILL_SPEND_STEP: i32 = 10;

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Investigator Builder");
    tracing::info!("  Storage: {}", config.storage_dir.display());
    tracing::info!("  Slot: {}", config.save_slot);

    let reference = match &config.reference_data_dir {
        Some(dir) => reference_data::from_dir(dir),
        None => reference_data::builtin(),
    }
    .context("Failed to load reference data")?;

    let storage = JsonFileStorage::new(&config.storage_dir)
        .with_context(|| format!("Cannot open {}", config.storage_dir.display()))?;

    let mut service = CharacterServiceImpl::new(
        Arc::new(ThreadRngAdapter::new()),
        Arc::new(reference),
        Arc::new(storage),
    )
    .with_save_slot(config.save_slot.clone());

    if !service.load().context("Failed to load saved character")? {
        service.create_new_character();
    }

    let mut args = std::env::args().skip(1);
    if let Some(name) = args.next() {
        service.set_name(&name);
    }
    if let Some(age) = args.next() {
        let age: u32 = age
            .parse()
            .with_context(|| format!("AGE must be a whole number, got {age:?}"))?;
        service.set_age(age);
    }
    if let Some(occupation) = args.next() {
        if !service.select_occupation(&occupation) {
            bail!("Unknown occupation {occupation:?}");
        }
    }

    settle_age_deduction(&mut service);
    spend_skill_points(&mut service);
    if !service.is_backstory_complete() && !service.randomize_full_backstory() {
        tracing::warn!("Some backstory tables are empty");
    }

    service.save().context("Failed to save character")?;

    let sheet = service
        .character_sheet()
        .context("No character to print")?;
    println!("{}", serde_json::to_string_pretty(&sheet)?);
    Ok(())
}

/// Spread the remaining age deduction one point at a time over its stats
fn settle_age_deduction(service: &mut CharacterServiceImpl) {
    let Some(stats) = service.pending_deduction().map(|p| p.stats.clone()) else {
        return;
    };
    loop {
        let moved: i32 = stats
            .iter()
            .map(|stat| {
                let settled = service.pending_deduction().map_or(true, |p| p.is_settled());
                if settled {
                    0
                } else {
                    service.apply_stat_deduction(*stat, 1)
                }
            })
            .sum();
        if moved == 0 {
            break;
        }
    }
}

/// Raise occupational skills in even steps until the pool runs dry
fn spend_skill_points(service: &mut CharacterServiceImpl) {
    let Some(character) = service.current() else {
        return;
    };
    let targets: Vec<String> = character
        .skills
        .iter()
        .filter(|s| s.occupational_skill && !s.is_derived() && s.name != CREDIT_RATING)
        .map(|s| s.name.clone())
        .collect();

    loop {
        let mut spent = false;
        for name in &targets {
            let Some(character) = service.current() else {
                return;
            };
            let remaining = character.remaining_skill_points;
            let room = character
                .skill(name)
                .map_or(0, |s| SKILL_SPEND_CAP - s.total);
            let points = SKILL_SPEND_STEP.min(remaining).min(room);
            if points > 0 && service.allocate_skill_points(name, points) {
                spent = true;
            }
        }
        if !spent {
            break;
        }
    }
}
