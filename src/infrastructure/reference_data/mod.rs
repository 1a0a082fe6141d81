//! Reference data loading
//!
//! The default skill list, the occupation table and the backstory tables are
//! compiled into the binary. A directory holding files with the same names
//! can replace them at startup.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::domain::entities::{Occupation, Skill};
use crate::domain::value_objects::{BackstoryTables, FormulaError, ReferenceData};

pub const SKILLS_FILE: &str = "default-skills.json";
pub const OCCUPATIONS_FILE: &str = "occupations.json";
pub const BACKSTORY_FILE: &str = "backstory.json";

const BUILTIN_SKILLS: &str = include_str!("../../../assets/default-skills.json");
const BUILTIN_OCCUPATIONS: &str = include_str!("../../../assets/occupations.json");
const BUILTIN_BACKSTORY: &str = include_str!("../../../assets/backstory.json");

/// Errors raised while loading reference data
#[derive(Debug, thiserror::Error)]
pub enum ReferenceDataError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON in {file}: {source}")]
    Json {
        file: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Occupation '{occupation}' has an invalid skill point formula: {source}")]
    InvalidFormula {
        occupation: String,
        #[source]
        source: FormulaError,
    },
}

/// The tables shipped with the crate
pub fn builtin() -> Result<ReferenceData, ReferenceDataError> {
    build(
        parse(SKILLS_FILE, BUILTIN_SKILLS)?,
        parse(OCCUPATIONS_FILE, BUILTIN_OCCUPATIONS)?,
        parse(BACKSTORY_FILE, BUILTIN_BACKSTORY)?,
    )
}

/// Load every table from `dir`
pub fn from_dir(dir: impl AsRef<Path>) -> Result<ReferenceData, ReferenceDataError> {
    let dir = dir.as_ref();
    info!(dir = %dir.display(), "Loading reference data");
    build(
        read(dir, SKILLS_FILE)?,
        read(dir, OCCUPATIONS_FILE)?,
        read(dir, BACKSTORY_FILE)?,
    )
}

fn read<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<T, ReferenceDataError> {
    let path = dir.join(file);
    let contents = fs::read_to_string(&path).map_err(|source| ReferenceDataError::Io {
        path: path.clone(),
        source,
    })?;
    parse(file, &contents)
}

fn parse<T: DeserializeOwned>(file: &str, contents: &str) -> Result<T, ReferenceDataError> {
    serde_json::from_str(contents).map_err(|source| ReferenceDataError::Json {
        file: file.to_string(),
        source,
    })
}

fn build(
    skills: Vec<Skill>,
    occupations: Vec<Occupation>,
    backstory: BackstoryTables,
) -> Result<ReferenceData, ReferenceDataError> {
    validate_formulas(&occupations)?;
    debug!(
        skills = skills.len(),
        occupations = occupations.len(),
        "Reference data ready"
    );
    Ok(ReferenceData::new(skills, occupations, backstory))
}

/// Formulas are evaluated without checks later, so reject bad ones here
fn validate_formulas(occupations: &[Occupation]) -> Result<(), ReferenceDataError> {
    for occupation in occupations {
        occupation
            .formula()
            .map_err(|source| ReferenceDataError::InvalidFormula {
                occupation: occupation.name.clone(),
                source,
            })?;
    }
    Ok(())
}
