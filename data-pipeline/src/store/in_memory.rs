/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! In-memory implementation of the DocumentStore trait.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::operation::update_item::UpdateOperation;
use crate::store::{DocumentStore, StoreError};
use crate::types::ItemKey;

/// Subset of the DynamoDB reserved words, enough to exercise reserved-keyword rejection.
const DYNAMODB_RESERVED_WORDS: &[&str] = &[
    "ABORT", "ACTION", "ADD", "ALL", "AND", "AS", "BETWEEN", "BY", "COMMENT", "COUNT", "DATA",
    "DATE", "DELETE", "DESC", "FILE", "FROM", "GROUP", "HASH", "IN", "INDEX", "KEY", "LIMIT",
    "NAME", "NOT", "NULL", "OR", "ORDER", "PATH", "RANGE", "SET", "SIZE", "STATUS", "TABLE",
    "TIME", "TIMESTAMP", "TTL", "TYPE", "USER", "VALUE", "VALUES", "YEAR", "ZONE",
];

/// An in-memory implementation of the DocumentStore trait.
///
/// Updates behave like DynamoDB `UpdateItem` with a `set` clause: attributes named in the
/// clause are overwritten, all others are left untouched, and a missing item is created.
/// Attribute names found in the reserved word list are rejected with the same message
/// DynamoDB uses.
#[derive(Debug)]
pub struct InMemoryStore {
    // key value -> item
    items: RwLock<HashMap<String, Map<String, Value>>>,
    reserved_words: HashSet<String>,
    available: bool,
    update_calls: AtomicUsize,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Create an empty store that rejects DynamoDB reserved words.
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
            reserved_words: DYNAMODB_RESERVED_WORDS
                .iter()
                .map(|word| word.to_string())
                .collect(),
            available: true,
            update_calls: AtomicUsize::new(0),
        }
    }

    /// Create a store whose every update fails to execute.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// Treat `word` as reserved (case-insensitive).
    pub fn with_reserved_word(mut self, word: &str) -> Self {
        self.reserved_words.insert(word.to_uppercase());
        self
    }

    /// Store `item` under `key`, replacing any existing item.
    pub async fn put_item(&self, key: &ItemKey, mut item: Map<String, Value>) {
        item.insert(
            key.attribute().to_owned(),
            Value::String(key.value().to_owned()),
        );
        let mut items = self.items.write().await;
        items.insert(key.value().to_owned(), item);
    }

    /// Current state of the item with the given identifier.
    pub async fn get_item(&self, id: &str) -> Option<Map<String, Value>> {
        let items = self.items.read().await;
        items.get(id).cloned()
    }

    /// Number of `update_item` calls received, including failed ones.
    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    /// Resolve every assignment to `(attribute name, value)`, rejecting the whole update if any
    /// assignment is invalid.
    fn resolve<'a>(
        &self,
        key: &ItemKey,
        operation: &'a UpdateOperation,
    ) -> Result<Vec<(&'a str, &'a Value)>, StoreError> {
        let assignments: Vec<_> = operation.assignments().collect();
        if assignments.is_empty() {
            return Err(StoreError::Validation(
                "Invalid UpdateExpression: Syntax error; token: \"<EOF>\"".to_owned(),
            ));
        }

        assignments
            .into_iter()
            .map(|(name, placeholder)| {
                if self.reserved_words.contains(&name.to_uppercase()) {
                    return Err(StoreError::Validation(format!(
                        "Invalid UpdateExpression: Attribute name is a reserved keyword; reserved keyword: {name}"
                    )));
                }
                if name == key.attribute() {
                    return Err(StoreError::Validation(format!(
                        "One or more parameter values were invalid: Cannot update attribute {name}. This attribute is part of the key"
                    )));
                }
                let value = operation.values().get(placeholder).ok_or_else(|| {
                    StoreError::Validation(format!(
                        "Invalid UpdateExpression: An expression attribute value used in expression is not defined; attribute value: {placeholder}"
                    ))
                })?;
                Ok((name, value))
            })
            .collect()
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn update_item(
        &self,
        key: &ItemKey,
        operation: &UpdateOperation,
    ) -> Result<(), StoreError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if !self.available {
            return Err(StoreError::Execution(
                "in-memory store is unavailable".into(),
            ));
        }

        let assignments = self.resolve(key, operation)?;

        let mut items = self.items.write().await;
        let item = items.entry(key.value().to_owned()).or_insert_with(|| {
            let mut item = Map::new();
            item.insert(
                key.attribute().to_owned(),
                Value::String(key.value().to_owned()),
            );
            item
        });
        for (name, value) in assignments {
            item.insert(name.to_owned(), value.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn operation(value: Value) -> UpdateOperation {
        match value {
            Value::Object(attrs) => UpdateOperation::from_attributes(&attrs),
            other => panic!("expected object, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_update_creates_missing_item() {
        let storage = InMemoryStore::new();
        let key = ItemKey::new("id", "item-1");

        storage
            .update_item(&key, &operation(json!({"color": "red"})))
            .await
            .unwrap();

        let item = storage.get_item("item-1").await.unwrap();
        assert_eq!(Value::Object(item), json!({"id": "item-1", "color": "red"}));
    }

    #[tokio::test]
    async fn test_update_leaves_other_attributes() {
        let storage = InMemoryStore::new();
        let key = ItemKey::new("id", "item-1");
        let Value::Object(seed) = json!({"color": "red", "size_cm": 10}) else {
            unreachable!()
        };
        storage.put_item(&key, seed).await;

        storage
            .update_item(&key, &operation(json!({"color": "blue"})))
            .await
            .unwrap();

        let item = storage.get_item("item-1").await.unwrap();
        assert_eq!(
            Value::Object(item),
            json!({"id": "item-1", "color": "blue", "size_cm": 10})
        );
    }

    #[tokio::test]
    async fn test_reserved_word_rejects_whole_update() {
        let storage = InMemoryStore::new();
        let key = ItemKey::new("id", "item-1");

        let err = storage
            .update_item(&key, &operation(json!({"color": "red", "Status": "done"})))
            .await
            .unwrap_err();

        assert_eq!(
            Some("Invalid UpdateExpression: Attribute name is a reserved keyword; reserved keyword: Status"),
            err.validation_reason()
        );
        assert!(storage.get_item("item-1").await.is_none());
        assert_eq!(1, storage.update_calls());
    }

    #[tokio::test]
    async fn test_key_attribute_cannot_be_updated() {
        let storage = InMemoryStore::new();
        let key = ItemKey::new("id", "item-1");
        let Value::Object(seed) = json!({"color": "red"}) else {
            unreachable!()
        };
        storage.put_item(&key, seed).await;

        let err = storage
            .update_item(&key, &operation(json!({"id": "other", "color": "blue"})))
            .await
            .unwrap_err();

        assert_eq!(
            Some("One or more parameter values were invalid: Cannot update attribute id. This attribute is part of the key"),
            err.validation_reason()
        );
        let item = storage.get_item("item-1").await.unwrap();
        assert_eq!(Value::Object(item), json!({"id": "item-1", "color": "red"}));
    }

    #[tokio::test]
    async fn test_custom_reserved_word() {
        let storage = InMemoryStore::new().with_reserved_word("color");
        let err = storage
            .update_item(
                &ItemKey::new("id", "item-1"),
                &operation(json!({"color": "red"})),
            )
            .await
            .unwrap_err();
        assert!(err.validation_reason().is_some());
    }

    #[tokio::test]
    async fn test_unavailable() {
        let storage = InMemoryStore::unavailable();
        let err = storage
            .update_item(
                &ItemKey::new("id", "item-1"),
                &operation(json!({"color": "red"})),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Execution(_)));
        assert_eq!(1, storage.update_calls());
    }
}
