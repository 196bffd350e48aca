use std::collections::HashMap;

use crate::db::{
    collections::APPLICATION_SUBMISSIONS, get_as, set_as, DocumentStore, StoreError, StoredDocument,
};
use crate::modules::application::model::{ApplicationStatus, ApplicationSubmission};

pub struct ApplicationCrud<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> ApplicationCrud<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    pub async fn find(&self, connect_id: &str) -> Result<Option<ApplicationSubmission>, StoreError> {
        get_as(self.store, APPLICATION_SUBMISSIONS, connect_id).await
    }

    pub async fn save(&self, submission: &ApplicationSubmission) -> Result<(), StoreError> {
        set_as(self.store, APPLICATION_SUBMISSIONS, submission.connect_id(), submission).await
    }

    pub async fn save_batch(&self, submissions: &[ApplicationSubmission]) -> Result<usize, StoreError> {
        let docs = submissions
            .iter()
            .map(|s| Ok(StoredDocument::new(s.connect_id(), serde_json::to_value(s)?)))
            .collect::<Result<Vec<_>, serde_json::Error>>()?;

        self.store.set_many(APPLICATION_SUBMISSIONS, docs).await
    }

    /// Documents that fail to parse are skipped.
    pub async fn count_by_status(&self) -> Result<HashMap<ApplicationStatus, usize>, StoreError> {
        let mut counts = HashMap::new();
        for doc in self.store.list(APPLICATION_SUBMISSIONS, None).await? {
            match doc.parse::<ApplicationSubmission>() {
                Ok(submission) => *counts.entry(submission.status).or_insert(0) += 1,
                Err(e) => tracing::warn!(id = %doc.id, error = %e, "skipping unreadable application"),
            }
        }
        Ok(counts)
    }
}
