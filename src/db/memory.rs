use async_trait::async_trait;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

use super::{DocumentStore, StoreError, StoredDocument};

/// In-process store used by tests and dry runs. Documents within a
/// collection are kept ordered by id.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, BTreeMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map(BTreeMap::len)
            .unwrap_or(0)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<StoredDocument>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .map(|data| StoredDocument::new(id, data.clone())))
    }

    async fn set(&self, collection: &str, id: &str, data: Value) -> Result<(), StoreError> {
        if !data.is_object() {
            return Err(StoreError::NotAnObject(id.to_string()));
        }
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), data);
        Ok(())
    }

    async fn set_many(&self, collection: &str, docs: Vec<StoredDocument>) -> Result<usize, StoreError> {
        if let Some(bad) = docs.iter().find(|d| !d.data.is_object()) {
            return Err(StoreError::NotAnObject(bad.id.clone()));
        }
        let mut collections = self.collections.write().await;
        let target = collections.entry(collection.to_string()).or_default();
        let written = docs.len();
        for doc in docs {
            target.insert(doc.id, doc.data);
        }
        Ok(written)
    }

    async fn update_fields(&self, collection: &str, id: &str, fields: Value) -> Result<bool, StoreError> {
        let Value::Object(fields) = fields else {
            return Err(StoreError::NotAnObject(id.to_string()));
        };
        let mut collections = self.collections.write().await;
        let Some(Value::Object(existing)) = collections.get_mut(collection).and_then(|docs| docs.get_mut(id)) else {
            return Ok(false);
        };
        for (key, value) in fields {
            existing.insert(key, value);
        }
        Ok(true)
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().await;
        Ok(collections
            .get_mut(collection)
            .map(|docs| docs.remove(id).is_some())
            .unwrap_or(false))
    }

    async fn list(&self, collection: &str, limit: Option<i64>) -> Result<Vec<StoredDocument>, StoreError> {
        let collections = self.collections.read().await;
        let limit = limit.map(|l| l.max(0) as usize).unwrap_or(usize::MAX);
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .take(limit)
                    .map(|(id, data)| StoredDocument::new(id.clone(), data.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|(_, data)| data.get(field).and_then(Value::as_str) == Some(value))
                    .map(|(id, data)| StoredDocument::new(id.clone(), data.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_then_get() {
        tokio_test::block_on(async {
            let store = MemoryStore::new();
            store.set("users", "1", json!({"email": "a@test.com"})).await.unwrap();

            let doc = store.get("users", "1").await.unwrap().unwrap();
            assert_eq!(doc.str_field("email"), Some("a@test.com"));
            assert!(store.get("users", "2").await.unwrap().is_none());
            assert!(store.get("other", "1").await.unwrap().is_none());
        });
    }

    #[test]
    fn rejects_non_object_documents() {
        tokio_test::block_on(async {
            let store = MemoryStore::new();
            let err = store.set("users", "1", json!([1, 2])).await.unwrap_err();
            assert!(matches!(err, StoreError::NotAnObject(_)));
        });
    }

    #[test]
    fn update_fields_merges_and_reports_missing() {
        tokio_test::block_on(async {
            let store = MemoryStore::new();
            store.set("users", "1", json!({"email": "a@test.com"})).await.unwrap();

            assert!(store.update_fields("users", "1", json!({"role": "ADMIN"})).await.unwrap());
            assert!(!store.update_fields("users", "9", json!({"role": "ADMIN"})).await.unwrap());

            let doc = store.get("users", "1").await.unwrap().unwrap();
            assert_eq!(doc.data, json!({"email": "a@test.com", "role": "ADMIN"}));
        });
    }

    #[test]
    fn list_respects_limit_and_order() {
        tokio_test::block_on(async {
            let store = MemoryStore::new();
            let docs = ["c", "a", "b"]
                .iter()
                .map(|id| StoredDocument::new(*id, json!({})))
                .collect();
            assert_eq!(store.set_many("users", docs).await.unwrap(), 3);

            let listed = store.list("users", Some(2)).await.unwrap();
            let ids: Vec<_> = listed.iter().map(|d| d.id.as_str()).collect();
            assert_eq!(ids, vec!["a", "b"]);
        });
    }
}
