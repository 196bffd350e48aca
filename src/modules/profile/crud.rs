use crate::db::{collections::USER_PROFILES, get_as, DocumentStore, StoreError, StoredDocument};
use crate::modules::profile::model::UserProfile;

pub struct ProfileCrud<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> ProfileCrud<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    pub async fn find(&self, connect_id: &str) -> Result<Option<UserProfile>, StoreError> {
        get_as(self.store, USER_PROFILES, connect_id).await
    }

    /// Writes the whole slice as one batch, keyed by ConnectID.
    pub async fn save_batch(&self, profiles: &[UserProfile]) -> Result<usize, StoreError> {
        let docs = profiles
            .iter()
            .map(|p| Ok(StoredDocument::new(p.connect_id.clone(), serde_json::to_value(p)?)))
            .collect::<Result<Vec<_>, serde_json::Error>>()?;

        self.store.set_many(USER_PROFILES, docs).await
    }

    pub async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.store.list(USER_PROFILES, None).await?.len())
    }
}

#[derive(Debug)]
pub struct BatchUpload {
    pub uploaded: usize,
    pub batches: usize,
    /// 1-based number of the batch that failed, with its error. Later batches are not attempted.
    pub failure: Option<(usize, StoreError)>,
}

impl ProfileCrud<'_> {
    pub async fn upload_in_batches(&self, profiles: &[UserProfile], batch_size: usize) -> BatchUpload {
        let mut report = BatchUpload {
            uploaded: 0,
            batches: 0,
            failure: None,
        };

        for (i, batch) in profiles.chunks(batch_size.max(1)).enumerate() {
            let batch_num = i + 1;
            match self.save_batch(batch).await {
                Ok(written) => {
                    report.uploaded += written;
                    report.batches += 1;
                    tracing::info!(
                        batch = batch_num,
                        progress = %format!("{}/{}", report.uploaded, profiles.len()),
                        "profile batch uploaded"
                    );
                }
                Err(e) => {
                    report.failure = Some((batch_num, e));
                    break;
                }
            }
        }

        report
    }
}
