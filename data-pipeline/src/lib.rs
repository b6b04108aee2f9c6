/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */

//! Serverless data pipeline
//!
//! Request handling for the pipeline's HTTP Lambda functions. The central operation is a
//! partial update of a single DynamoDB item: the request body's top-level attributes are
//! assigned onto the item addressed by the `id` path parameter.
//!
//! # Getting started
//!
//! ```no_run
//! #[tokio::main]
//! async fn main() -> Result<(), data_pipeline::error::Error> {
//!     // reads TABLE_NAME and PRIMARY_KEY
//!     let config = data_pipeline::from_env().load().await?;
//!     let client = data_pipeline::Client::new(config);
//!
//!     let outcome = client
//!         .update_item()
//!         .id("item-1")
//!         .body(r#"{"status": "processed"}"#)
//!         .send()
//!         .await?;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```
//!
//! The [`handler`] module adapts API Gateway proxy events to these operations and
//! [`http`] shapes the resulting HTTP responses.
//!
//! # Crate Features
//!
//! - `test-util`: Enables utilities for unit tests. DO NOT ENABLE IN PRODUCTION.

#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

/// Error types emitted by `data-pipeline`
pub mod error;

/// Common types used by `data-pipeline`
pub mod types;

/// Pipeline client
pub mod client;

/// Pipeline operations
pub mod operation;

/// Pipeline configuration
pub mod config;

/// Document store abstraction and implementations
pub mod store;

/// HTTP response shaping
pub mod http;

/// Lambda request handlers
pub mod handler;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
