use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{doc, Bson, Document};
use futures::TryStreamExt;
use mongodb::{Client, Collection, Database};
use serde_json::Value;

use super::{DocumentStore, StoreError, StoredDocument};

/// MongoDB-backed store. Each document's `_id` is its ConnectID.
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, mongodb::error::Error> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self::new(client.database(db_name)))
    }

    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection(name)
    }
}

fn to_document(id: &str, data: Value) -> Result<Document, StoreError> {
    if !data.is_object() {
        return Err(StoreError::NotAnObject(id.to_string()));
    }
    let mut document =
        bson::to_document(&data).map_err(|e| StoreError::ConversionError(e.to_string()))?;
    document.insert("_id", id);
    Ok(document)
}

/// Matches a string `_id` and, when `id` is 24 hex chars, the equivalent
/// ObjectId written by the backend.
fn id_filter(id: &str) -> Document {
    match ObjectId::parse_str(id) {
        Ok(oid) => doc! { "_id": { "$in": [oid, id] } },
        Err(_) => doc! { "_id": id },
    }
}

fn from_document(mut document: Document) -> StoredDocument {
    let id = match document.remove("_id") {
        Some(Bson::String(s)) => s,
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(other) => other.to_string(),
        None => String::new(),
    };
    StoredDocument::new(id, Bson::Document(document).into_relaxed_extjson())
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<StoredDocument>, StoreError> {
        let found = self.collection(collection).find_one(id_filter(id)).await?;
        Ok(found.map(from_document))
    }

    async fn set(&self, collection: &str, id: &str, data: Value) -> Result<(), StoreError> {
        let document = to_document(id, data)?;
        self.collection(collection)
            .replace_one(doc! { "_id": id }, document)
            .upsert(true)
            .await?;
        Ok(())
    }

    async fn set_many(&self, collection: &str, docs: Vec<StoredDocument>) -> Result<usize, StoreError> {
        if docs.is_empty() {
            return Ok(0);
        }

        let documents = docs
            .iter()
            .map(|d| Ok((d.id.as_str(), to_document(&d.id, d.data.clone())?)))
            .collect::<Result<Vec<_>, StoreError>>()?;

        let coll = self.collection(collection);
        for (id, document) in documents {
            coll.replace_one(doc! { "_id": id }, document).upsert(true).await?;
        }

        Ok(docs.len())
    }

    async fn update_fields(&self, collection: &str, id: &str, fields: Value) -> Result<bool, StoreError> {
        if !fields.is_object() {
            return Err(StoreError::NotAnObject(id.to_string()));
        }
        let fields =
            bson::to_document(&fields).map_err(|e| StoreError::ConversionError(e.to_string()))?;

        let result = self
            .collection(collection)
            .update_one(id_filter(id), doc! { "$set": fields })
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<bool, StoreError> {
        let result = self.collection(collection).delete_one(id_filter(id)).await?;
        Ok(result.deleted_count > 0)
    }

    async fn list(&self, collection: &str, limit: Option<i64>) -> Result<Vec<StoredDocument>, StoreError> {
        let coll = self.collection(collection);
        let mut find = coll.find(doc! {});
        if let Some(limit) = limit {
            find = find.limit(limit);
        }

        let documents: Vec<Document> = find.await?.try_collect().await?;
        Ok(documents.into_iter().map(from_document).collect())
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        let mut filter = Document::new();
        filter.insert(field, value);

        let cursor = self.collection(collection).find(filter).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(from_document).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn document_conversion_keeps_id_out_of_data() {
        let document = to_document("346492379800", json!({"likes": ["523214175859"]})).unwrap();
        assert_eq!(document.get_str("_id").unwrap(), "346492379800");

        let stored = from_document(document);
        assert_eq!(stored.id, "346492379800");
        assert_eq!(stored.data, json!({"likes": ["523214175859"]}));
    }

    #[test]
    fn object_ids_are_rendered_as_hex() {
        let oid = bson::oid::ObjectId::new();
        let stored = from_document(doc! { "_id": oid, "email": "x@test.com" });
        assert_eq!(stored.id, oid.to_hex());
        assert_eq!(stored.str_field("email"), Some("x@test.com"));
    }

    #[test]
    fn id_filter_covers_object_ids() {
        assert_eq!(id_filter("346492379800"), doc! { "_id": "346492379800" });

        let oid = bson::oid::ObjectId::new();
        let hex = oid.to_hex();
        assert_eq!(id_filter(&hex), doc! { "_id": { "$in": [oid, hex.as_str()] } });
    }
}
