use std::future::Future;

use aws_sdk_s3::Client;
use uuid::Uuid;

use spectrum_core::models::result::{QuizResult, ResultFields};
use spectrum_core::s3_keys;

use crate::error::StorageError;
use crate::{json, objects};

/// Persistence for quiz results.
///
/// Results are created once and never updated; the store assigns the id
/// and creation timestamp. `None` as the user id addresses anonymous
/// results.
pub trait ResultStore: Send + Sync {
    fn create_result(
        &self,
        fields: ResultFields,
    ) -> impl Future<Output = Result<QuizResult, StorageError>> + Send;

    /// All results of one user, oldest first.
    fn results_by_user(
        &self,
        user_id: Option<Uuid>,
    ) -> impl Future<Output = Result<Vec<QuizResult>, StorageError>> + Send;

    fn get_result(
        &self,
        user_id: Option<Uuid>,
        id: Uuid,
    ) -> impl Future<Output = Result<QuizResult, StorageError>> + Send;

    fn delete_result(
        &self,
        user_id: Option<Uuid>,
        id: Uuid,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;
}

/// Results stored as JSON objects under `results/{owner}/{id}.json`.
#[derive(Clone)]
pub struct S3ResultStore {
    client: Client,
    bucket: String,
}

impl S3ResultStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

impl ResultStore for S3ResultStore {
    async fn create_result(&self, fields: ResultFields) -> Result<QuizResult, StorageError> {
        let result = QuizResult::from_fields(Uuid::new_v4(), jiff::Timestamp::now(), fields);
        let key = s3_keys::result(result.user_id, result.id);
        json::save_json(&self.client, &self.bucket, &key, &result).await?;
        tracing::info!(key = %key, "stored result");
        Ok(result)
    }

    async fn results_by_user(&self, user_id: Option<Uuid>) -> Result<Vec<QuizResult>, StorageError> {
        let prefix = s3_keys::results_prefix(user_id);
        let keys = objects::list_json_keys(&self.client, &self.bucket, &prefix).await?;

        let mut results = Vec::with_capacity(keys.len());
        for key in &keys {
            let result: QuizResult = json::load_json(&self.client, &self.bucket, key).await?;
            results.push(result);
        }
        results.sort_by_key(|r| r.created_at);
        Ok(results)
    }

    async fn get_result(&self, user_id: Option<Uuid>, id: Uuid) -> Result<QuizResult, StorageError> {
        let key = s3_keys::result(user_id, id);
        json::load_json(&self.client, &self.bucket, &key).await
    }

    async fn delete_result(&self, user_id: Option<Uuid>, id: Uuid) -> Result<(), StorageError> {
        // S3 deletes are idempotent; look the object up first so a missing
        // result reports NotFound.
        self.get_result(user_id, id).await?;
        let key = s3_keys::result(user_id, id);
        objects::delete_object(&self.client, &self.bucket, &key).await?;
        tracing::info!(key = %key, "deleted result");
        Ok(())
    }
}
