//! Probe operations over DynamoDB
//!
//! Thin wrapped calls used to verify connectivity and table state. Every call
//! is routed through the classifying wrapper so a failure produces exactly
//! one classified log line before it propagates to the caller.

use std::sync::Arc;

use aws_sdk_dynamodb::{
    error::SdkError,
    operation::{describe_table::DescribeTableError, list_tables::ListTablesError},
    types::TableDescription,
    Client as DynamoDbClient,
};

use crate::classify::{run_logged, ErrorSink};

/// DynamoDB probe client with an injected failure sink
pub struct TableProbe<S> {
    dynamodb_client: Arc<DynamoDbClient>,
    sink: S,
}

impl<S: ErrorSink> TableProbe<S> {
    /// Creates a new probe over a pre-configured client
    #[must_use]
    pub const fn new(dynamodb_client: Arc<DynamoDbClient>, sink: S) -> Self {
        Self {
            dynamodb_client,
            sink,
        }
    }

    /// Returns the injected failure sink
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Lists the table names visible to the client
    ///
    /// # Errors
    ///
    /// Returns the SDK error unchanged after logging its classification
    pub async fn list_tables(&self) -> Result<Vec<String>, SdkError<ListTablesError>> {
        let output = run_logged(&self.sink, || async {
            self.dynamodb_client.list_tables().send().await
        })
        .await?;

        Ok(output.table_names().to_vec())
    }

    /// Fetches the description of a single table
    ///
    /// # Errors
    ///
    /// Returns the SDK error unchanged after logging its classification
    pub async fn describe_table(
        &self,
        table_name: &str,
    ) -> Result<Option<TableDescription>, SdkError<DescribeTableError>> {
        let output = run_logged(&self.sink, || async {
            self.dynamodb_client
                .describe_table()
                .table_name(table_name)
                .send()
                .await
        })
        .await?;

        Ok(output.table().cloned())
    }
}
