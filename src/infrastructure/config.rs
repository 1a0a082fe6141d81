//! Application configuration

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

use crate::application::services::DEFAULT_SAVE_SLOT;

/// Prefix of every environment variable read into [`AppConfig`]
pub const ENV_PREFIX: &str = "INVESTIGATOR";

pub const DEFAULT_STORAGE_DIR: &str = "./data";
pub const DEFAULT_LOG_FILTER: &str = "investigator_builder=info";

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Directory holding save slots
    pub storage_dir: PathBuf,
    /// Slot the character is saved under
    pub save_slot: String,
    /// Directory with reference tables replacing the built-in ones
    #[serde(default)]
    pub reference_data_dir: Option<PathBuf>,
    /// Fallback tracing filter when RUST_LOG is unset
    pub log_filter: String,
}

impl AppConfig {
    /// Load configuration from `INVESTIGATOR_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::build(Environment::with_prefix(ENV_PREFIX))
    }

    /// Load configuration from an explicit variable map instead of the process environment
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self> {
        Self::build(Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn build(environment: Environment) -> Result<Self> {
        Config::builder()
            .set_default("storage_dir", DEFAULT_STORAGE_DIR)?
            .set_default("save_slot", DEFAULT_SAVE_SLOT)?
            .set_default("log_filter", DEFAULT_LOG_FILTER)?
            .add_source(environment)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }
}
