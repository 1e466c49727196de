//! Classifying call wrapper for AWS operations
//!
//! Runs a fallible operation and, when it fails, sorts the error into one of
//! a closed set of kinds, emits exactly one message through an injected sink,
//! then hands the original error back unchanged. Successful calls produce no
//! output. This is purely an observability shim: no recovery, no retry, no
//! suppression.

use std::fmt::Display;
use std::future::Future;

use aws_sdk_dynamodb::error::{ProvideErrorMetadata, SdkError};

use crate::error::SessionError;

/// Classification of a failed call.
///
/// The set is closed and the variants are disjoint, so a credentials failure
/// can never be absorbed by the broader service arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorClass {
    /// No authentication material was available to the operation
    MissingCredentials,
    /// The service rejected the call with a structured error
    Service {
        /// Human-readable message nested in the service response
        message: String,
    },
    /// Anything else
    Unclassified,
}

/// Maps an error to its [`ErrorClass`].
///
/// Implementations must check the credentials condition before the generic
/// service condition.
pub trait Classify {
    /// Returns the classification for this error
    fn classify(&self) -> ErrorClass;
}

/// Destination for classified failure messages
pub trait ErrorSink {
    /// Records one failure message
    fn error(&self, message: &str);
}

/// Sink that forwards to `tracing::error!`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

impl Classify for SessionError {
    fn classify(&self) -> ErrorClass {
        match self {
            Self::MissingCredentials(_) | Self::NoCredentialsProvider => {
                ErrorClass::MissingCredentials
            }
        }
    }
}

impl<E, R> Classify for SdkError<E, R>
where
    E: ProvideErrorMetadata,
{
    fn classify(&self) -> ErrorClass {
        // Credentials are resolved before any call is dispatched (see
        // `session::client`), so an SdkError is either a structured service
        // error or unclassified.
        self.as_service_error()
            .and_then(ProvideErrorMetadata::message)
            .map_or(ErrorClass::Unclassified, |message| ErrorClass::Service {
                message: message.to_owned(),
            })
    }
}

/// Runs `op` and logs exactly one classified message if it fails.
///
/// The return value, success or failure, is exactly what `op` produced.
///
/// # Errors
///
/// Propagates the error of `op` unchanged.
pub async fn run_logged<T, E, F, Fut>(sink: &impl ErrorSink, op: F) -> Result<T, E>
where
    E: Classify + Display,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let result = op().await;
    if let Err(err) = &result {
        let message = match err.classify() {
            ErrorClass::MissingCredentials => "AWS credentials not found.".to_owned(),
            ErrorClass::Service { message } => format!("DynamoDB Client Error: {message}"),
            ErrorClass::Unclassified => format!("An unexpected error occurred: {err}"),
        };
        sink.error(&message);
    }
    result
}
