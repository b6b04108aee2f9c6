/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
//! Document store backends.
//!
//! This module provides the `DocumentStore` trait and its implementations.
//! A document store addresses items by a single primary key and applies
//! attribute-level updates to them atomically.

use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

use crate::error::BoxError;
use crate::operation::update_item::UpdateOperation;
use crate::types::ItemKey;

mod dynamodb;
pub use dynamodb::DynamoDbStore;

#[cfg(any(test, feature = "test-util"))]
mod in_memory;
#[cfg(any(test, feature = "test-util"))]
pub use in_memory::InMemoryStore;

/// Failure reported by a document store.
///
/// Stores report a category rather than raw diagnostics so callers can classify failures
/// without depending on a particular store client.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store rejected the update as invalid (e.g. a reserved attribute name).
    #[error("store rejected the update: {0}")]
    Validation(String),

    /// The update could not be executed.
    #[error("store failed to execute the update")]
    Execution(#[source] BoxError),
}

impl StoreError {
    /// Reason reported with a validation failure, if this is one.
    pub fn validation_reason(&self) -> Option<&str> {
        match self {
            StoreError::Validation(reason) => Some(reason),
            StoreError::Execution(_) => None,
        }
    }
}

/// A document store the partial-update service can write to.
#[async_trait]
pub trait DocumentStore: Send + Sync + Debug {
    /// Apply `operation` to the item identified by `key`.
    ///
    /// Implementations must not return the previous or updated item. A key that matches no
    /// item is not an error.
    async fn update_item(&self, key: &ItemKey, operation: &UpdateOperation)
        -> Result<(), StoreError>;
}

#[async_trait]
impl<T> DocumentStore for Arc<T>
where
    T: DocumentStore + ?Sized,
{
    async fn update_item(
        &self,
        key: &ItemKey,
        operation: &UpdateOperation,
    ) -> Result<(), StoreError> {
        (**self).update_item(key, operation).await
    }
}
