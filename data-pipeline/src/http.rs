/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Mapping of operation results onto HTTP responses.
//!
//! Responses only ever carry one of a fixed set of messages. Failure detail is logged where the
//! failure is classified and is never written to a response body.

use lambda_http::http::header::CONTENT_TYPE;
use lambda_http::http::{HeaderValue, StatusCode};
use lambda_http::{Body, Response};
use serde_json::{json, Value};

use crate::error::{Error, ErrorKind};
use crate::operation::ingest::IngestOutput;
use crate::types::UpdateOutcome;

/// Response body when the request has no body
pub const MISSING_BODY_MESSAGE: &str = "Invalid request, you are missing the parameter body";

/// Response body when the `id` path parameter is absent
pub const MISSING_IDENTIFIER_MESSAGE: &str =
    "Invalid request, you are missing the path parameter id";

/// Response body when the body has no attributes
pub const EMPTY_PATCH_MESSAGE: &str = "Invalid request, no arguments provided";

/// Response body for any store failure other than a reserved keyword
pub const STORE_ERROR_MESSAGE: &str =
    "Error: Execution update, caused a DynamoDB error, please take a look at your CloudWatch Logs.";

const INGEST_SUCCESS_MESSAGE: &str = "File processed successfully!";
const INGEST_MISSING_BODY_MESSAGE: &str = "Bad Request: No body provided";
const INGEST_FAILURE_MESSAGE: &str = "Internal Server Error";

/// Shape the result of an update-item request.
///
/// | result | status | body |
/// |---|---|---|
/// | missing body, missing id, empty patch | 400 | message naming the failed precondition |
/// | [`UpdateOutcome::Success`] | 204 | empty |
/// | [`UpdateOutcome::ValidationError`] | 500 | the validation message |
/// | [`UpdateOutcome::StoreError`] or any other error | 500 | [`STORE_ERROR_MESSAGE`] |
pub fn update_item_response(result: Result<UpdateOutcome, Error>) -> Response<Body> {
    match result {
        Ok(UpdateOutcome::Success) => response(StatusCode::NO_CONTENT, Body::Empty),
        Ok(UpdateOutcome::ValidationError(message)) => {
            text(StatusCode::INTERNAL_SERVER_ERROR, message)
        }
        Ok(UpdateOutcome::StoreError) => {
            text(StatusCode::INTERNAL_SERVER_ERROR, STORE_ERROR_MESSAGE)
        }
        Err(err) => match err.kind() {
            ErrorKind::MissingBody => text(StatusCode::BAD_REQUEST, MISSING_BODY_MESSAGE),
            ErrorKind::MissingIdentifier => {
                text(StatusCode::BAD_REQUEST, MISSING_IDENTIFIER_MESSAGE)
            }
            ErrorKind::EmptyPatch => text(StatusCode::BAD_REQUEST, EMPTY_PATCH_MESSAGE),
            _ => text(StatusCode::INTERNAL_SERVER_ERROR, STORE_ERROR_MESSAGE),
        },
    }
}

/// Shape the result of an ingest request as a JSON response.
pub fn ingest_response(result: Result<IngestOutput, Error>) -> Response<Body> {
    match result {
        Ok(output) => {
            let mut payload = json!({ "message": INGEST_SUCCESS_MESSAGE });
            if let (Value::Object(fields), Some(content)) = (&mut payload, output.file_content) {
                fields.insert("content".to_owned(), content);
            }
            json_response(StatusCode::OK, payload)
        }
        Err(err) if err.kind() == &ErrorKind::MissingBody => json_response(
            StatusCode::BAD_REQUEST,
            json!({ "message": INGEST_MISSING_BODY_MESSAGE }),
        ),
        Err(_) => json_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "message": INGEST_FAILURE_MESSAGE }),
        ),
    }
}

fn text(status: StatusCode, message: impl Into<String>) -> Response<Body> {
    response(status, Body::Text(message.into()))
}

fn json_response(status: StatusCode, payload: Value) -> Response<Body> {
    let mut response = response(status, Body::Text(payload.to_string()));
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

fn response(status: StatusCode, body: Body) -> Response<Body> {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    response
}
