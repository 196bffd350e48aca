use crate::db::{collections::USER_MATCH_POOLS, get_as, set_as, DocumentStore, StoreError};
use crate::modules::match_pool::model::UserMatchPool;

pub struct MatchPoolCrud<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> MatchPoolCrud<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    pub async fn find(&self, connect_id: &str) -> Result<Option<UserMatchPool>, StoreError> {
        get_as(self.store, USER_MATCH_POOLS, connect_id).await
    }

    pub async fn save(&self, pool: &UserMatchPool) -> Result<(), StoreError> {
        set_as(self.store, USER_MATCH_POOLS, &pool.connect_id, pool).await
    }

    pub async fn delete(&self, connect_id: &str) -> Result<bool, StoreError> {
        self.store.delete(USER_MATCH_POOLS, connect_id).await
    }
}
