use std::sync::Arc;

use spectrum_lambda::config::Config;
use spectrum_lambda::state::AppState;
use spectrum_lambda::{router, telemetry};
use spectrum_storage::S3ResultStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = Config::from_env();
    telemetry::init_tracing(config.log_format);

    let questions = config.load_question_bank()?;
    tracing::info!(
        bucket = %config.bucket,
        region = %config.region,
        questions = questions.len(),
        "starting"
    );

    let s3 = spectrum_storage::client::build_client(&config.region).await;
    let state = AppState {
        store: Arc::new(S3ResultStore::new(s3, config.bucket.clone())),
        questions: Arc::new(questions),
    };

    lambda_http::run(router(state)).await.map_err(|e| eyre::eyre!(e))
}
