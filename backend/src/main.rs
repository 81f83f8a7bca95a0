use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;

use backend::{media_storage::S3ObjectStore, server, state::AppState, types::Environment};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    // Configure logging format based on environment
    // Use JSON format for staging/production, regular format for development
    let env_filter = || {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(environment.tracing_level().to_string()))
    };
    match environment {
        Environment::Production | Environment::Staging => {
            fmt().json().with_env_filter(env_filter()).init();
        }
        Environment::Development => {
            fmt().with_env_filter(env_filter()).init();
        }
    }

    let s3_client = Arc::new(S3Client::from_conf(environment.s3_client_config().await));
    let store = Arc::new(S3ObjectStore::new(s3_client, environment.bucket()));

    let state = AppState {
        store,
        public_base_url: environment.public_base_url().into(),
    };

    server::start(&environment, state).await
}
