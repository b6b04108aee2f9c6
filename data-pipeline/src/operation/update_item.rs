/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod expression;
mod input;

use std::sync::Arc;

use aws_smithy_types::error::display::DisplayErrorContext;

use crate::error::Error;
use crate::store::StoreError;
use crate::types::{ItemKey, UpdateOutcome};

pub use expression::UpdateOperation;
/// Request types for partial updates
pub use input::{UpdateItemInput, UpdateItemInputBuilder, UpdateRequest};

/// Message returned when the store rejects an attribute name as a reserved keyword
pub const RESERVED_KEYWORD_MESSAGE: &str =
    "Error: You're using AWS reserved keywords as attributes";

/// Text the store includes in validation failures caused by reserved attribute names
const RESERVED_KEYWORD_INDICATOR: &str = "reserved keyword";

/// Operation struct for a partial update of a single item
#[derive(Clone, Default, Debug)]
pub(crate) struct UpdateItem;

impl UpdateItem {
    /// Execute a single `UpdateItem` operation
    ///
    /// Validate, build, invoke the store once, classify. Invalid input fails before the store
    /// is touched.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: UpdateItemInput,
    ) -> Result<UpdateOutcome, Error> {
        let request = input.validate()?;
        let operation = UpdateOperation::from_attributes(request.attributes());
        let key = ItemKey::new(handle.config.primary_key(), request.target_id());

        tracing::debug!(
            id = request.target_id(),
            clause = operation.clause(),
            "updating item"
        );

        let result = handle.config.store().update_item(&key, &operation).await;
        Ok(classify(result))
    }
}

/// Map the store result to an [`UpdateOutcome`], logging failure details.
fn classify(result: Result<(), StoreError>) -> UpdateOutcome {
    let err = match result {
        Ok(()) => return UpdateOutcome::Success,
        Err(err) => err,
    };

    tracing::error!(error = %DisplayErrorContext(&err), "update failed");
    match err.validation_reason() {
        Some(reason) if reason.contains(RESERVED_KEYWORD_INDICATOR) => {
            UpdateOutcome::ValidationError(RESERVED_KEYWORD_MESSAGE.to_owned())
        }
        _ => UpdateOutcome::StoreError,
    }
}
