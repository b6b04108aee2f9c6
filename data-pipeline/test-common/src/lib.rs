/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;

use aws_smithy_runtime_api::client::orchestrator::HttpResponse;
use aws_smithy_runtime_api::http::StatusCode;
use aws_smithy_types::body::SdkBody;
use data_pipeline::store::DocumentStore;
use lambda_http::{Body, Request, RequestExt};

/// Table name used by clients created with [`pipeline_client`]
pub const TEST_TABLE: &str = "ServerlessPipelineTable";

/// Primary-key attribute used by clients created with [`pipeline_client`]
pub const TEST_PRIMARY_KEY: &str = "id";

/// Build a pipeline client writing to [`TEST_TABLE`] through `dynamodb`.
pub fn pipeline_client(dynamodb: aws_sdk_dynamodb::Client) -> data_pipeline::Client {
    let config = data_pipeline::Config::builder()
        .table_name(TEST_TABLE)
        .primary_key(TEST_PRIMARY_KEY)
        .client(dynamodb)
        .build()
        .unwrap();
    data_pipeline::Client::new(config)
}

/// Build a pipeline client writing to an explicit document store.
pub fn store_client(store: impl DocumentStore + 'static) -> data_pipeline::Client {
    let config = data_pipeline::Config::builder()
        .primary_key(TEST_PRIMARY_KEY)
        .store(store)
        .build()
        .unwrap();
    data_pipeline::Client::new(config)
}

/// Content type of DynamoDB (awsJson1.0) responses
const AWS_JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.0";

/// A DynamoDB error response as it arrives over the wire.
///
/// The error code is carried in `__type`, prefixed by the service namespace, so the real
/// response deserializer extracts it.
pub fn dynamodb_error_response(status: u16, code: &str, message: &str) -> HttpResponse {
    let body = format!(
        r#"{{"__type":"com.amazonaws.dynamodb.v20120810#{code}","message":"{message}"}}"#
    );
    let mut response = HttpResponse::new(StatusCode::try_from(status).unwrap(), SdkBody::from(body));
    response
        .headers_mut()
        .insert("content-type", AWS_JSON_CONTENT_TYPE);
    response
}

/// The response DynamoDB sends when an update expression names a reserved word
pub fn reserved_keyword_response(name: &str) -> HttpResponse {
    dynamodb_error_response(
        400,
        "ValidationException",
        &format!(
            "Invalid UpdateExpression: Attribute name is a reserved keyword; reserved keyword: {name}"
        ),
    )
}

#[doc(hidden)]
pub mod __private {
    pub use aws_smithy_mocks_experimental::{MockResponseInterceptor, RuleMode};
    pub use aws_smithy_runtime::client::http::test_util::infallible_client_fn;
    pub use http_02x;
}

/// Like `aws_smithy_mocks_experimental::mock_client!` but with an HTTP client that answers every
/// request with an empty `200`.
///
/// Rules using `then_http_response` replace that response before it is deserialized, so error
/// responses go through the SDK's real error parsing and no request leaves the process.
#[macro_export]
macro_rules! mock_client_with_stubbed_http_client {
    ($aws_crate: ident, $rules: expr) => {
        $crate::mock_client_with_stubbed_http_client!(
            $aws_crate,
            $crate::__private::RuleMode::Sequential,
            $rules
        )
    };
    ($aws_crate: ident, $rule_mode: expr, $rules: expr) => {{
        let mut mock_response_interceptor =
            $crate::__private::MockResponseInterceptor::new().rule_mode($rule_mode);
        for rule in $rules {
            mock_response_interceptor = mock_response_interceptor.with_rule(rule)
        }
        <$aws_crate::Client>::from_conf(
            <$aws_crate::Config>::builder()
                .with_test_defaults()
                .region($aws_crate::config::Region::from_static("us-east-1"))
                .http_client($crate::__private::infallible_client_fn(|_req| {
                    $crate::__private::http_02x::Response::builder()
                        .status(200)
                        .body("{}")
                        .unwrap()
                }))
                .interceptor(mock_response_interceptor)
                .build(),
        )
    }};
}

/// An API Gateway proxy event with an optional `id` path parameter and text body.
pub fn api_request(id: Option<&str>, body: Option<&str>) -> Request {
    let body = match body {
        Some(body) => Body::Text(body.to_owned()),
        None => Body::Empty,
    };
    let request = Request::new(body);
    match id {
        Some(id) => request.with_path_parameters(HashMap::from([(
            data_pipeline::handler::ID_PATH_PARAMETER.to_owned(),
            id.to_owned(),
        )])),
        None => request,
    }
}

/// Text of a response body, panicking on any other body kind.
pub fn body_text(body: &Body) -> &str {
    match body {
        Body::Text(text) => text,
        Body::Empty => "",
        other => panic!("unexpected body {other:?}"),
    }
}
