use std::path::Path;
use thiserror::Error;

use crate::modules::profile::model::UserProfile;

pub const DEFAULT_FIXTURE_PATH: &str = "test_profiles_50.json";

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid fixture JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub fn save(path: &Path, profiles: &[UserProfile]) -> Result<(), FixtureError> {
    let json = serde_json::to_string_pretty(profiles)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn load(path: &Path) -> Result<Vec<UserProfile>, FixtureError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
