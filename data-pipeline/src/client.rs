/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::Config;
use std::sync::Arc;

/// Partial-update client for the pipeline's document store.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Client {
    /// Creates a new client from a pipeline config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Update attributes of a single item.
    ///
    /// Constructs a fluent builder for the
    /// [`UpdateItem`](crate::operation::update_item::builders::UpdateItemFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use data_pipeline::types::UpdateOutcome;
    ///
    /// async fn rename(client: &data_pipeline::Client) -> Result<(), data_pipeline::error::Error> {
    ///     let outcome = client
    ///         .update_item()
    ///         .id("item-1")
    ///         .body(r#"{"title": "quarterly report"}"#)
    ///         .send()
    ///         .await?;
    ///
    ///     assert_eq!(UpdateOutcome::Success, outcome);
    ///     Ok(())
    /// }
    /// ```
    pub fn update_item(&self) -> crate::operation::update_item::builders::UpdateItemFluentBuilder {
        crate::operation::update_item::builders::UpdateItemFluentBuilder::new(self.handle.clone())
    }
}
