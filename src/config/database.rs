use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use super::{env_or, ConfigError};
use crate::db::mongo::MongoStore;

const DEFAULT_CREDENTIALS_FILE: &str = "keys/service-account.json";
const DEFAULT_DATABASE: &str = "connect";

#[derive(Debug, Deserialize)]
struct CredentialsFile {
    uri: String,
    #[serde(default)]
    database: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database: String,
}

impl DatabaseConfig {
    /// `MONGODB_URI` wins; otherwise the key file named by `CONNECT_CREDENTIALS_FILE`.
    pub fn load() -> Result<Self, ConfigError> {
        let database = env::var("MONGODB_DATABASE").ok().filter(|d| !d.is_empty());

        if let Ok(uri) = env::var("MONGODB_URI") {
            if !uri.is_empty() {
                return Ok(Self {
                    uri,
                    database: database.unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
                });
            }
        }

        let path = PathBuf::from(env_or("CONNECT_CREDENTIALS_FILE", DEFAULT_CREDENTIALS_FILE));
        let mut config = Self::from_credentials_file(&path)?;
        if let Some(db) = database {
            config.database = db;
        }
        Ok(config)
    }

    pub fn from_credentials_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingCredentials(path.display().to_string()));
        }

        let raw = std::fs::read_to_string(path)?;
        let creds: CredentialsFile = serde_json::from_str(&raw)
            .map_err(|e| ConfigError::InvalidCredentials(e.to_string()))?;

        if creds.uri.is_empty() {
            return Err(ConfigError::InvalidCredentials("uri is empty".to_string()));
        }

        Ok(Self {
            uri: creds.uri,
            database: creds.database.unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
        })
    }
}

pub async fn connect() -> Result<MongoStore, ConfigError> {
    let config = DatabaseConfig::load()?;
    tracing::debug!(database = %config.database, "connecting to document store");
    MongoStore::connect(&config.uri, &config.database)
        .await
        .map_err(ConfigError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_credentials_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"uri": "mongodb://localhost:27017", "database": "connect-test"}}"#).unwrap();

        let config = DatabaseConfig::from_credentials_file(file.path()).unwrap();
        assert_eq!(config.uri, "mongodb://localhost:27017");
        assert_eq!(config.database, "connect-test");
    }

    #[test]
    fn database_defaults_when_absent() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"uri": "mongodb://db:27017"}}"#).unwrap();

        let config = DatabaseConfig::from_credentials_file(file.path()).unwrap();
        assert_eq!(config.database, "connect");
    }

    #[test]
    fn missing_file_is_reported() {
        let err = DatabaseConfig::from_credentials_file(Path::new("/nonexistent/key.json")).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredentials(_)));
    }

    #[test]
    fn malformed_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = DatabaseConfig::from_credentials_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCredentials(_)));
    }
}
