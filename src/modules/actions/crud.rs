use crate::db::{collections::USER_ACTIONS, get_as, set_as, DocumentStore, StoreError};
use crate::modules::actions::model::UserActions;

pub struct UserActionsCrud<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> UserActionsCrud<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    pub async fn find(&self, connect_id: &str) -> Result<Option<UserActions>, StoreError> {
        get_as(self.store, USER_ACTIONS, connect_id).await
    }

    /// A missing record reads as empty lists.
    pub async fn find_or_empty(&self, connect_id: &str) -> Result<UserActions, StoreError> {
        Ok(self.find(connect_id).await?.unwrap_or_default())
    }

    pub async fn save(&self, connect_id: &str, actions: &UserActions) -> Result<(), StoreError> {
        set_as(self.store, USER_ACTIONS, connect_id, actions).await
    }

    pub async fn delete(&self, connect_id: &str) -> Result<bool, StoreError> {
        self.store.delete(USER_ACTIONS, connect_id).await
    }
}
