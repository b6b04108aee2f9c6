/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use serde_json::{Map, Value};

use crate::error::{self, Error};
use crate::types::RequestBody;

/// Input type for a partial update of a single item
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateItemInput {
    /// Identifier of the item to update, taken from the `id` path parameter.
    pub id: Option<String>,

    /// Request body holding a JSON object of attribute name to new value.
    pub body: Option<RequestBody>,
}

impl UpdateItemInput {
    /// Creates a new builder-style object to manufacture [`UpdateItemInput`].
    pub fn builder() -> UpdateItemInputBuilder {
        UpdateItemInputBuilder::default()
    }

    /// Identifier of the item to update
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Request body, if any
    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    /// Validate the input and decode its body.
    ///
    /// Checks run in order and the first failure wins: body present, identifier present,
    /// body decodes to a JSON object, object has at least one attribute.
    pub(crate) fn validate(self) -> Result<UpdateRequest, Error> {
        let body = match self.body {
            Some(body) if !body.is_empty() => body,
            _ => return Err(error::missing_body("request body is absent")),
        };

        let target_id = match self.id {
            Some(id) if !id.is_empty() => id,
            _ => return Err(error::missing_identifier()),
        };

        let attributes = match body.decode().map_err(error::missing_body)? {
            Value::Object(attributes) => attributes,
            other => {
                return Err(error::missing_body(format!(
                    "request body is not a JSON object: {}",
                    json_type(&other)
                )))
            }
        };

        if attributes.is_empty() {
            return Err(error::empty_patch());
        }

        Ok(UpdateRequest {
            target_id,
            attributes,
        })
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A builder for [`UpdateItemInput`].
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateItemInputBuilder {
    pub(crate) id: Option<String>,
    pub(crate) body: Option<RequestBody>,
}

impl UpdateItemInputBuilder {
    /// Identifier of the item to update.
    pub fn id(mut self, input: impl Into<String>) -> Self {
        self.id = Some(input.into());
        self
    }

    /// Identifier of the item to update.
    pub fn set_id(mut self, input: Option<String>) -> Self {
        self.id = input;
        self
    }

    /// Identifier of the item to update.
    pub fn get_id(&self) -> &Option<String> {
        &self.id
    }

    /// Request body holding the attributes to set.
    pub fn body(mut self, input: impl Into<RequestBody>) -> Self {
        self.body = Some(input.into());
        self
    }

    /// Request body holding the attributes to set.
    pub fn set_body(mut self, input: Option<RequestBody>) -> Self {
        self.body = input;
        self
    }

    /// Request body holding the attributes to set.
    pub fn get_body(&self) -> &Option<RequestBody> {
        &self.body
    }

    /// Consumes the builder and constructs a [`UpdateItemInput`].
    ///
    /// Validation is deferred until the update is sent.
    pub fn build(self) -> UpdateItemInput {
        UpdateItemInput {
            id: self.id,
            body: self.body,
        }
    }
}

/// A validated partial update
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateRequest {
    target_id: String,
    attributes: Map<String, Value>,
}

impl UpdateRequest {
    /// Identifier of the item to update, never empty
    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    /// Attributes to set, in request body order, never empty
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }
}
