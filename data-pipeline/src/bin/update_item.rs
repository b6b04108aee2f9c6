/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Lambda function applying partial updates to items in the pipeline table.
//!
//! Requires `TABLE_NAME` and `PRIMARY_KEY` to be set.

use data_pipeline::handler;
use lambda_http::{run, service_fn, Error, Request};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_line_number(true)
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .with_current_span(true)
        .with_span_list(false)
        .flatten_event(true)
        .init();

    let config = data_pipeline::from_env().load().await?;
    tracing::debug!(primary_key = config.primary_key(), "loaded configuration");
    let client = &data_pipeline::Client::new(config);

    run(service_fn(move |request: Request| async move {
        handler::update_item(client, request).await
    }))
    .await
}
