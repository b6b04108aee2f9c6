/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use data_pipeline::handler;
use lambda_http::http::StatusCode;
use serde_json::{json, Value};
use test_common::{api_request, body_text};

#[tokio::test]
async fn test_file_content_is_returned() {
    let request = api_request(None, Some(r#"{"fileContent": "id,total\n1,20\n"}"#));
    let response = handler::ingest(request).await.unwrap();

    assert_eq!(StatusCode::OK, response.status());
    let payload: Value = serde_json::from_str(body_text(response.body())).unwrap();
    assert_eq!(
        json!({"message": "File processed successfully!", "content": "id,total\n1,20\n"}),
        payload
    );
}

#[tokio::test]
async fn test_no_body() {
    let response = handler::ingest(api_request(None, None)).await.unwrap();

    assert_eq!(StatusCode::BAD_REQUEST, response.status());
    let payload: Value = serde_json::from_str(body_text(response.body())).unwrap();
    assert_eq!(json!({"message": "Bad Request: No body provided"}), payload);
}

#[tokio::test]
async fn test_malformed_body() {
    let response = handler::ingest(api_request(None, Some("fileContent=abc")))
        .await
        .unwrap();

    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, response.status());
    let payload: Value = serde_json::from_str(body_text(response.body())).unwrap();
    assert_eq!(json!({"message": "Internal Server Error"}), payload);
}

#[tokio::test]
async fn test_non_object_body_is_rejected() {
    for body in ["[1]", r#"["x"]"#, "42"] {
        let response = handler::ingest(api_request(None, Some(body))).await.unwrap();

        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, response.status(), "{body}");
        let payload: Value = serde_json::from_str(body_text(response.body())).unwrap();
        assert_eq!(json!({"message": "Internal Server Error"}), payload);
    }
}

#[tokio::test]
async fn test_null_file_content_is_echoed() {
    let request = api_request(None, Some(r#"{"fileContent": null}"#));
    let response = handler::ingest(request).await.unwrap();

    assert_eq!(StatusCode::OK, response.status());
    let payload: Value = serde_json::from_str(body_text(response.body())).unwrap();
    assert_eq!(
        json!({"message": "File processed successfully!", "content": null}),
        payload
    );
}
