//! Error types for DynamoDB session construction

use aws_credential_types::provider::error::CredentialsError;
use thiserror::Error;

/// Result type alias for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while building a DynamoDB client
#[derive(Error, Debug)]
pub enum SessionError {
    /// The credential chain resolved no authentication material
    #[error("AWS credentials not found: {0}")]
    MissingCredentials(#[from] CredentialsError),

    /// The resolved SDK configuration carries no credentials provider at all
    #[error("no credentials provider configured")]
    NoCredentialsProvider,
}
