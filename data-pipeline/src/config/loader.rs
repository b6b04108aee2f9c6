/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::env;

use crate::config::Builder;
use crate::error::{self, Error};
use crate::Config;

/// Environment variable holding the DynamoDB table name
pub const TABLE_NAME_ENV: &str = "TABLE_NAME";

/// Environment variable holding the primary-key attribute name
pub const PRIMARY_KEY_ENV: &str = "PRIMARY_KEY";

/// Load pipeline [`Config`] from the environment.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    table_name: Option<String>,
    primary_key: Option<String>,
}

impl ConfigLoader {
    /// Name of the DynamoDB table to update.
    ///
    /// Default is the value of the `TABLE_NAME` environment variable.
    pub fn table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    /// Name of the table's primary-key attribute.
    ///
    /// Default is the value of the `PRIMARY_KEY` environment variable.
    pub fn primary_key(mut self, primary_key: impl Into<String>) -> Self {
        self.primary_key = Some(primary_key.into());
        self
    }

    /// Load the default configuration
    ///
    /// If fields have been overridden during builder construction, the override values will be
    /// used. Otherwise, the values are read from the environment. Missing or empty values fail
    /// before any AWS configuration is loaded. The DynamoDB client is built from the shared AWS
    /// configuration.
    pub async fn load(self) -> Result<Config, Error> {
        let table_name = resolve(self.table_name, TABLE_NAME_ENV)?;
        let primary_key = resolve(self.primary_key, PRIMARY_KEY_ENV)?;

        let shared_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .load()
            .await;
        let client = aws_sdk_dynamodb::Client::new(&shared_config);

        Builder::default()
            .table_name(table_name)
            .primary_key(primary_key)
            .client(client)
            .build()
    }
}

/// The override if set, otherwise the environment variable `name`. Empty values are rejected.
fn resolve(value: Option<String>, name: &str) -> Result<String, Error> {
    let value = match value {
        Some(value) => value,
        None => env::var(name).map_err(|err| error::invalid_config(format!("{name}: {err}")))?,
    };
    if value.is_empty() {
        return Err(error::invalid_config(format!("{name} is empty")));
    }
    Ok(value)
}
