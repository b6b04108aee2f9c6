/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;
use crate::types::{RequestBody, UpdateOutcome};

use super::UpdateItemInputBuilder;

/// Fluent builder for constructing a partial update of a single item
#[derive(Debug)]
pub struct UpdateItemFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: UpdateItemInputBuilder,
}

impl UpdateItemFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Validate the request, apply it to the document store and classify the result.
    ///
    /// Returns an error only when the request itself is invalid, in which case the store is
    /// never called. Store failures are reported through [`UpdateOutcome`].
    pub async fn send(self) -> Result<UpdateOutcome, Error> {
        let input = self.inner.build();
        crate::operation::update_item::UpdateItem::orchestrate(self.handle, input).await
    }

    /// Access the UpdateItem as a reference.
    pub fn as_input(&self) -> &UpdateItemInputBuilder {
        &self.inner
    }

    /// Identifier of the item to update.
    pub fn id(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.id(input);
        self
    }

    /// Identifier of the item to update.
    pub fn set_id(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_id(input);
        self
    }

    /// Identifier of the item to update.
    pub fn get_id(&self) -> &Option<String> {
        self.inner.get_id()
    }

    /// Request body holding the attributes to set.
    pub fn body(mut self, input: impl Into<RequestBody>) -> Self {
        self.inner = self.inner.body(input);
        self
    }

    /// Request body holding the attributes to set.
    pub fn set_body(mut self, input: Option<RequestBody>) -> Self {
        self.inner = self.inner.set_body(input);
        self
    }

    /// Request body holding the attributes to set.
    pub fn get_body(&self) -> &Option<RequestBody> {
        self.inner.get_body()
    }
}

impl UpdateItemInputBuilder {
    /// Send the update with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<UpdateOutcome, Error> {
        let mut fluent_builder = client.update_item();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
