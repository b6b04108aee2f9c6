/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use bytes::Bytes;
use serde_json::Value;

/// Body of an inbound request, before it has been decoded.
///
/// Bodies arrive either as raw bytes from the transport or as a value some caller already
/// decoded. Decoding is always explicit; see [`RequestBody::decode`].
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Undecoded bytes (e.g. the text of an API Gateway proxy event body)
    Raw(Bytes),

    /// An already decoded JSON value
    Json(Value),
}

impl RequestBody {
    /// True if there is nothing to decode.
    pub(crate) fn is_empty(&self) -> bool {
        match self {
            RequestBody::Raw(bytes) => bytes.is_empty(),
            RequestBody::Json(_) => false,
        }
    }

    /// Decode the body into a JSON value.
    pub(crate) fn decode(self) -> Result<Value, serde_json::Error> {
        match self {
            RequestBody::Raw(bytes) => serde_json::from_slice(&bytes),
            RequestBody::Json(value) => Ok(value),
        }
    }
}

impl From<Bytes> for RequestBody {
    fn from(value: Bytes) -> Self {
        RequestBody::Raw(value)
    }
}

impl From<Vec<u8>> for RequestBody {
    fn from(value: Vec<u8>) -> Self {
        RequestBody::Raw(Bytes::from(value))
    }
}

impl From<String> for RequestBody {
    fn from(value: String) -> Self {
        RequestBody::Raw(Bytes::from(value))
    }
}

impl From<&'static str> for RequestBody {
    fn from(value: &'static str) -> Self {
        RequestBody::Raw(Bytes::from_static(value.as_bytes()))
    }
}

impl From<Value> for RequestBody {
    fn from(value: Value) -> Self {
        RequestBody::Json(value)
    }
}

/// Primary key of the item targeted by an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemKey {
    attribute: String,
    value: String,
}

impl ItemKey {
    /// Key the item whose `attribute` equals `value`.
    pub fn new(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Name of the primary-key attribute
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Identifier of the targeted item
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Result of a partial update once the store has been invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The store accepted the change
    Success,

    /// The store rejected an attribute name as a reserved keyword
    ValidationError(String),

    /// Any other store failure. Details are only logged.
    StoreError,
}

impl UpdateOutcome {
    /// True if the store accepted the change
    pub fn is_success(&self) -> bool {
        matches!(self, UpdateOutcome::Success)
    }
}
