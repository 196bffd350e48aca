use serde_json::json;

use crate::db::{
    collections::{PROFILE_DIRECTORY, USERS, USER_AUTH},
    DocumentStore, StoreError, StoredDocument,
};
use crate::modules::account::model::{AuthRecord, ADMIN_ROLE};

pub struct AccountCrud<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> AccountCrud<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    pub async fn list_users(&self, limit: i64) -> Result<Vec<StoredDocument>, StoreError> {
        self.store.list(USERS, Some(limit)).await
    }

    pub async fn find_user(&self, connect_id: &str) -> Result<Option<StoredDocument>, StoreError> {
        self.store.get(USERS, connect_id).await
    }

    pub async fn find_directory_profile(&self, connect_id: &str) -> Result<Option<StoredDocument>, StoreError> {
        self.store.get(PROFILE_DIRECTORY, connect_id).await
    }

    /// Sets `role = ADMIN` on every user with `email`. Returns the updated ids.
    pub async fn promote_to_admin(&self, email: &str) -> Result<Vec<String>, StoreError> {
        let mut promoted = Vec::new();
        for user in self.store.find_by_field(USERS, "email", email).await? {
            if self
                .store
                .update_fields(USERS, &user.id, json!({ "role": ADMIN_ROLE }))
                .await?
            {
                tracing::info!(connect_id = %user.id, "role set to ADMIN");
                promoted.push(user.id);
            }
        }
        Ok(promoted)
    }

    pub async fn list_auth_records(&self) -> Result<Vec<AuthRecord>, StoreError> {
        let docs = self.store.list(USER_AUTH, None).await?;
        Ok(docs.iter().map(AuthRecord::from_document).collect())
    }

    pub async fn delete_auth_record(&self, id: &str) -> Result<bool, StoreError> {
        self.store.delete(USER_AUTH, id).await
    }
}
