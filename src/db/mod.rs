//! Narrow document-store interface: documents are JSON objects addressed by
//! collection name and document id.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;

pub mod memory;
pub mod mongo;

pub mod collections {
    pub const USER_ACTIONS: &str = "userActions";
    pub const USER_MATCH_POOLS: &str = "UserMatchPools";
    pub const USER_PROFILES: &str = "user_profiles";
    pub const PROFILE_DIRECTORY: &str = "userProfiles";
    pub const APPLICATION_SUBMISSIONS: &str = "applicationSubmissions";
    pub const USERS: &str = "users";
    pub const USER_AUTH: &str = "userAuth";
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] mongodb::error::Error),
    #[error("Document conversion failed: {0}")]
    ConversionError(String),
    #[error("Document {0} is not a JSON object")]
    NotAnObject(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::ConversionError(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub data: Value,
}

impl StoredDocument {
    pub fn new(id: impl Into<String>, data: Value) -> Self {
        Self { id: id.into(), data }
    }

    pub fn str_field(&self, field: &str) -> Option<&str> {
        self.data.get(field).and_then(Value::as_str)
    }

    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, StoreError> {
        Ok(serde_json::from_value(self.data.clone())?)
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<StoredDocument>, StoreError>;

    /// Creates or fully replaces the document.
    async fn set(&self, collection: &str, id: &str, data: Value) -> Result<(), StoreError>;

    /// Creates or replaces several documents. Not transactional: a failure part-way
    /// leaves later ids untouched, and existing documents are never removed.
    async fn set_many(&self, collection: &str, docs: Vec<StoredDocument>) -> Result<usize, StoreError>;

    /// Merges top-level `fields` into an existing document. Returns false when absent.
    async fn update_fields(&self, collection: &str, id: &str, fields: Value) -> Result<bool, StoreError>;

    async fn delete(&self, collection: &str, id: &str) -> Result<bool, StoreError>;

    async fn list(&self, collection: &str, limit: Option<i64>) -> Result<Vec<StoredDocument>, StoreError>;

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<StoredDocument>, StoreError>;
}

pub async fn get_as<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    collection: &str,
    id: &str,
) -> Result<Option<T>, StoreError> {
    match store.get(collection, id).await? {
        Some(doc) => Ok(Some(doc.parse()?)),
        None => Ok(None),
    }
}

pub async fn set_as<T: Serialize + Sync>(
    store: &dyn DocumentStore,
    collection: &str,
    id: &str,
    value: &T,
) -> Result<(), StoreError> {
    let data = serde_json::to_value(value)?;
    if !data.is_object() {
        return Err(StoreError::NotAnObject(id.to_string()));
    }
    store.set(collection, id, data).await
}
