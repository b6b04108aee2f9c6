/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Amazon DynamoDB implementation of the DocumentStore trait.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};

use crate::operation::update_item::UpdateOperation;
use crate::store::{DocumentStore, StoreError};
use crate::types::ItemKey;

/// Error code DynamoDB reports for requests it rejects as invalid
const VALIDATION_EXCEPTION: &str = "ValidationException";

/// Document store backed by a single DynamoDB table.
#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoDbStore {
    /// Create a store writing to `table_name` through `client`.
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Name of the table updates are written to
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

/// Convert the placeholder mapping into DynamoDB attribute values.
fn expression_attribute_values(
    operation: &UpdateOperation,
) -> Result<HashMap<String, AttributeValue>, StoreError> {
    operation
        .values()
        .iter()
        .map(|(placeholder, value)| {
            let value: AttributeValue = serde_dynamo::to_attribute_value(value)
                .map_err(|err| StoreError::Execution(err.into()))?;
            Ok((placeholder.clone(), value))
        })
        .collect()
}

#[async_trait]
impl DocumentStore for DynamoDbStore {
    #[tracing::instrument(skip(self, operation), fields(table_name = %self.table_name))]
    async fn update_item(
        &self,
        key: &ItemKey,
        operation: &UpdateOperation,
    ) -> Result<(), StoreError> {
        let values = expression_attribute_values(operation)?;

        tracing::trace!(clause = operation.clause(), "sending UpdateItem");
        self.client
            .update_item()
            .table_name(&self.table_name)
            .key(key.attribute(), AttributeValue::S(key.value().to_owned()))
            .update_expression(operation.clause())
            .set_expression_attribute_values(Some(values))
            .return_values(ReturnValue::None)
            .send()
            .await?;

        Ok(())
    }
}

impl<E, R> From<SdkError<E, R>> for StoreError
where
    E: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
    R: Send + Sync + fmt::Debug + 'static,
{
    fn from(value: SdkError<E, R>) -> Self {
        match value.code() {
            Some(VALIDATION_EXCEPTION) => {
                StoreError::Validation(value.message().unwrap_or_default().to_owned())
            }
            _ => StoreError::Execution(value.into()),
        }
    }
}
