use tokio::sync::Mutex;
use uuid::Uuid;

use spectrum_core::models::result::{QuizResult, ResultFields};
use spectrum_core::s3_keys;

use crate::error::StorageError;
use crate::results::ResultStore;

/// Process-local store, for tests and local runs without S3.
#[derive(Default)]
pub struct MemoryResultStore {
    results: Mutex<Vec<QuizResult>>,
}

impl MemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultStore for MemoryResultStore {
    async fn create_result(&self, fields: ResultFields) -> Result<QuizResult, StorageError> {
        let result = QuizResult::from_fields(Uuid::new_v4(), jiff::Timestamp::now(), fields);
        self.results.lock().await.push(result.clone());
        Ok(result)
    }

    async fn results_by_user(&self, user_id: Option<Uuid>) -> Result<Vec<QuizResult>, StorageError> {
        let results = self.results.lock().await;
        let mut owned: Vec<QuizResult> = results
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by_key(|r| r.created_at);
        Ok(owned)
    }

    async fn get_result(&self, user_id: Option<Uuid>, id: Uuid) -> Result<QuizResult, StorageError> {
        self.results
            .lock()
            .await
            .iter()
            .find(|r| r.id == id && r.user_id == user_id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                key: s3_keys::result(user_id, id),
            })
    }

    async fn delete_result(&self, user_id: Option<Uuid>, id: Uuid) -> Result<(), StorageError> {
        let mut results = self.results.lock().await;
        let idx = results
            .iter()
            .position(|r| r.id == id && r.user_id == user_id)
            .ok_or_else(|| StorageError::NotFound {
                key: s3_keys::result(user_id, id),
            })?;
        results.remove(idx);
        Ok(())
    }
}
