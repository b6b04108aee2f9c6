/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::{self, Error};
use crate::store::{DocumentStore, DynamoDbStore};

/// Config loader
pub mod loader;

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    primary_key: String,
    store: Arc<dyn DocumentStore>,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Name of the primary-key attribute items are addressed by
    pub fn primary_key(&self) -> &str {
        &self.primary_key
    }

    /// The document store updates are applied to.
    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    table_name: Option<String>,
    primary_key: Option<String>,
    client: Option<aws_sdk_dynamodb::Client>,
    store: Option<Arc<dyn DocumentStore>>,
}

impl Builder {
    /// Name of the DynamoDB table to update.
    ///
    /// Required when the store is given as a DynamoDB [`client`](Self::client).
    pub fn table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    /// Name of the table's primary-key attribute. Required.
    pub fn primary_key(mut self, primary_key: impl Into<String>) -> Self {
        self.primary_key = Some(primary_key.into());
        self
    }

    /// Set an explicit DynamoDB client to use.
    ///
    /// Ignored if an explicit [`store`](Self::store) is set.
    pub fn client(mut self, client: aws_sdk_dynamodb::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set an explicit document store to use.
    pub fn store(mut self, store: impl DocumentStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Consumes the builder and constructs a [`Config`]
    ///
    /// Fails if the primary key is missing or empty, or if there is no store (neither an
    /// explicit store nor a client together with a non-empty table name).
    pub fn build(self) -> Result<Config, Error> {
        let primary_key = match self.primary_key {
            Some(primary_key) if !primary_key.is_empty() => primary_key,
            _ => return Err(error::invalid_config("primary key attribute must be set")),
        };

        let store = match (self.store, self.client, self.table_name) {
            (Some(store), _, _) => store,
            (None, Some(client), Some(table_name)) if !table_name.is_empty() => {
                Arc::new(DynamoDbStore::new(client, table_name))
            }
            (None, Some(_), _) => return Err(error::invalid_config("table name must be set")),
            (None, None, _) => {
                return Err(error::invalid_config(
                    "either a document store or a DynamoDB client must be set",
                ))
            }
        };

        Ok(Config { primary_key, store })
    }
}

#[cfg(test)]
mod test {
    use super::Config;
    use crate::error::ErrorKind;
    use crate::store::InMemoryStore;
    use aws_sdk_dynamodb::config::{BehaviorVersion, Region};

    fn dynamodb_client() -> aws_sdk_dynamodb::Client {
        let conf = aws_sdk_dynamodb::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::from_static("us-east-1"))
            .build();
        aws_sdk_dynamodb::Client::from_conf(conf)
    }

    #[test]
    fn test_build_with_store() {
        let config = Config::builder()
            .primary_key("id")
            .store(InMemoryStore::new())
            .build()
            .unwrap();
        assert_eq!("id", config.primary_key());
    }

    #[test]
    fn test_build_with_client() {
        let config = Config::builder()
            .primary_key("id")
            .table_name("ServerlessPipelineTable")
            .client(dynamodb_client())
            .build()
            .unwrap();
        assert!(format!("{:?}", config.store()).contains("ServerlessPipelineTable"));
    }

    #[test]
    fn test_primary_key_required() {
        let err = Config::builder()
            .primary_key("")
            .store(InMemoryStore::new())
            .build()
            .unwrap_err();
        assert_eq!(&ErrorKind::InvalidConfig, err.kind());
    }

    #[test]
    fn test_store_required() {
        let err = Config::builder().primary_key("id").build().unwrap_err();
        assert_eq!(&ErrorKind::InvalidConfig, err.kind());

        let err = Config::builder()
            .primary_key("id")
            .client(dynamodb_client())
            .build()
            .unwrap_err();
        assert_eq!(&ErrorKind::InvalidConfig, err.kind());
    }
}
