//! Environment-driven construction of configured DynamoDB clients

use std::{env, time::Duration};

use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion, Region};
use aws_credential_types::{provider::ProvideCredentials, Credentials};
use aws_sdk_dynamodb::Client as DynamoDbClient;

use crate::classify::{run_logged, ErrorSink};
use crate::error::{SessionError, SessionResult};

const LOCALSTACK_ENDPOINT: &str = "http://localhost:4566";
const LOCALSTACK_REGION: &str = "us-east-1";

/// Application environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment (uses `LocalStack`)
    Development,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// # Panics
    ///
    /// Panics if `APP_ENV` contains an invalid value
    #[must_use]
    pub fn from_env() -> Self {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Self::Production,
            "staging" => Self::Staging,
            "development" => Self::Development,
            _ => panic!("Invalid environment: {env}"),
        }
    }

    /// Returns the endpoint URL to use for AWS services
    #[must_use]
    pub const fn override_aws_endpoint_url(&self) -> Option<&str> {
        match self {
            // Regular AWS endpoints for production and staging
            Self::Production | Self::Staging => None,
            // LocalStack endpoint for development
            Self::Development => Some(LOCALSTACK_ENDPOINT),
        }
    }

    /// AWS configuration with retry and timeout settings.
    ///
    /// Development injects static `LocalStack` credentials and a fixed region
    /// so the config resolves without touching the real credential chain.
    pub async fn aws_config(&self) -> aws_config::SdkConfig {
        let retry_config = RetryConfig::standard()
            .with_max_attempts(3)
            .with_initial_backoff(Duration::from_millis(50));

        let timeout_config = TimeoutConfig::builder()
            .connect_timeout(Duration::from_secs(5))
            .read_timeout(Duration::from_secs(30))
            .build();

        match self {
            Self::Production | Self::Staging => aws_config::load_defaults(BehaviorVersion::latest())
                .await
                .to_builder()
                .retry_config(retry_config)
                .timeout_config(timeout_config)
                .build(),
            Self::Development => {
                aws_config::defaults(BehaviorVersion::latest())
                    .endpoint_url(LOCALSTACK_ENDPOINT)
                    .region(Region::new(LOCALSTACK_REGION))
                    .credentials_provider(Credentials::from_keys("test", "test", None))
                    .retry_config(retry_config)
                    .timeout_config(timeout_config)
                    .load()
                    .await
            }
        }
    }
}

/// Builds a DynamoDB client for the given environment.
///
/// Credentials are resolved eagerly so a missing-credentials condition
/// surfaces here rather than on the first table call.
///
/// # Errors
///
/// Returns [`SessionError::MissingCredentials`] if the credential chain
/// yields nothing, [`SessionError::NoCredentialsProvider`] if the resolved
/// SDK configuration carries no provider at all.
pub async fn client(environment: &Environment) -> SessionResult<DynamoDbClient> {
    let config = environment.aws_config().await;

    let provider = config
        .credentials_provider()
        .ok_or(SessionError::NoCredentialsProvider)?;
    provider.provide_credentials().await?;

    Ok(DynamoDbClient::new(&config))
}

/// Same as [`client`], with any failure routed through the classifying sink
/// before it propagates.
///
/// # Errors
///
/// Propagates the error of [`client`] unchanged.
pub async fn client_logged(
    environment: &Environment,
    sink: &impl ErrorSink,
) -> SessionResult<DynamoDbClient> {
    run_logged(sink, || client(environment)).await
}
