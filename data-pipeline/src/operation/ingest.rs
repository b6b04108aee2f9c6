/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{self, Error};
use crate::types::RequestBody;

/// Input type for ingesting an uploaded file
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IngestInput {
    /// Request body, a JSON object with an optional `fileContent` field.
    pub body: Option<RequestBody>,
}

/// Decoded ingest request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IngestPayload {
    // absent is None, an explicit null is Some(Value::Null)
    #[serde(default, deserialize_with = "present")]
    file_content: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl IngestInput {
    /// Creates a new builder-style object to manufacture [`IngestInput`].
    pub fn builder() -> IngestInputBuilder {
        IngestInputBuilder::default()
    }

    /// Decode the body and extract the file content.
    ///
    /// No processing is applied to the content; it is returned as received.
    pub fn process(self) -> Result<IngestOutput, Error> {
        let body = match self.body {
            Some(body) if !body.is_empty() => body,
            _ => return Err(error::missing_body("request body is absent")),
        };

        let fields = match body.decode().map_err(error::malformed_body)? {
            Value::Object(fields) => fields,
            _ => return Err(error::malformed_body("request body is not a JSON object")),
        };
        let payload: IngestPayload =
            serde_json::from_value(Value::Object(fields)).map_err(error::malformed_body)?;
        tracing::debug!(file_content = ?payload.file_content, "file content received");

        Ok(IngestOutput {
            file_content: payload.file_content,
        })
    }
}

/// A builder for [`IngestInput`].
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IngestInputBuilder {
    body: Option<RequestBody>,
}

impl IngestInputBuilder {
    /// Request body holding the file content.
    pub fn body(mut self, input: impl Into<RequestBody>) -> Self {
        self.body = Some(input.into());
        self
    }

    /// Request body holding the file content.
    pub fn set_body(mut self, input: Option<RequestBody>) -> Self {
        self.body = input;
        self
    }

    /// Consumes the builder and constructs an [`IngestInput`].
    pub fn build(self) -> IngestInput {
        IngestInput { body: self.body }
    }
}

/// Result of ingesting a file
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct IngestOutput {
    /// The `fileContent` field of the request, if present. An explicit `null` is kept as
    /// `Some(Value::Null)`.
    pub file_content: Option<Value>,
}

impl IngestOutput {
    /// The `fileContent` field of the request, if present
    pub fn file_content(&self) -> Option<&Value> {
        self.file_content.as_ref()
    }
}

#[cfg(test)]
mod test {
    use super::IngestInput;
    use crate::error::ErrorKind;
    use serde_json::{json, Value};

    #[test]
    fn test_file_content_is_echoed() {
        let output = IngestInput::builder()
            .body(r#"{"fileContent": "a,b,c\n1,2,3"}"#)
            .build()
            .process()
            .unwrap();
        assert_eq!(Some(&json!("a,b,c\n1,2,3")), output.file_content());
    }

    #[test]
    fn test_missing_file_content() {
        let output = IngestInput::builder()
            .body(r#"{"other": 1}"#)
            .build()
            .process()
            .unwrap();
        assert_eq!(None, output.file_content());
    }

    #[test]
    fn test_null_file_content_is_kept() {
        let output = IngestInput::builder()
            .body(r#"{"fileContent": null}"#)
            .build()
            .process()
            .unwrap();
        assert_eq!(Some(&Value::Null), output.file_content());
    }

    #[test]
    fn test_missing_body() {
        let err = IngestInput::builder().build().process().unwrap_err();
        assert_eq!(&ErrorKind::MissingBody, err.kind());
    }

    #[test]
    fn test_malformed_body() {
        for body in ["{not json", "[1]", r#"["x"]"#, "null", "5", r#""text""#] {
            let err = IngestInput::builder()
                .body(body)
                .build()
                .process()
                .unwrap_err();
            assert_eq!(&ErrorKind::MalformedBody, err.kind(), "{body}");
        }
    }
}
