/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Adapters from API Gateway proxy events to pipeline operations.

use lambda_http::{Body, Request, RequestExt, Response};

use crate::http;
use crate::operation::ingest::IngestInput;
use crate::types::RequestBody;
use crate::Client;

/// Name of the path parameter identifying the item to update
pub const ID_PATH_PARAMETER: &str = "id";

/// Handle a partial update request for the item named by the `id` path parameter.
pub async fn update_item(
    client: &Client,
    request: Request,
) -> Result<Response<Body>, lambda_http::Error> {
    tracing::debug!(event = ?request, "received update request");

    let id = request
        .path_parameters_ref()
        .and_then(|params| params.first(ID_PATH_PARAMETER))
        .map(str::to_owned);

    let result = client
        .update_item()
        .set_id(id)
        .set_body(request_body(request.into_body()))
        .send()
        .await;

    Ok(http::update_item_response(result))
}

/// Handle a file ingest request.
pub async fn ingest(request: Request) -> Result<Response<Body>, lambda_http::Error> {
    tracing::debug!(event = ?request, "received ingest request");

    let result = IngestInput::builder()
        .set_body(request_body(request.into_body()))
        .build()
        .process();
    if let Err(err) = &result {
        tracing::error!(error = %err, "failed to process file");
    }

    Ok(http::ingest_response(result))
}

fn request_body(body: Body) -> Option<RequestBody> {
    match body {
        Body::Empty => None,
        Body::Text(text) => Some(text.into()),
        Body::Binary(bytes) => Some(bytes.into()),
    }
}
