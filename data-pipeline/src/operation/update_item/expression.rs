/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use serde_json::{Map, Value};

/// Prefix identifying the clause as an assignment
const SET_PREFIX: &str = "set ";

/// Store-native form of a partial update: an update clause plus the values its placeholders
/// refer to.
///
/// Attribute names are written into the clause verbatim. Names that collide with keywords
/// reserved by the store are rejected by the store, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOperation {
    clause: String,
    // (attribute name, placeholder) in clause order
    assignments: Vec<(String, String)>,
    values: Map<String, Value>,
}

impl UpdateOperation {
    /// Build the operation assigning every attribute in `attributes`, in map order.
    ///
    /// `{"name": "x", "age": 5}` becomes the clause `set name = :name, age = :age` with values
    /// `{":name": "x", ":age": 5}`.
    pub fn from_attributes(attributes: &Map<String, Value>) -> Self {
        let mut clause = String::from(SET_PREFIX);
        let mut assignments = Vec::with_capacity(attributes.len());
        let mut values = Map::with_capacity(attributes.len());

        for (idx, (name, value)) in attributes.iter().enumerate() {
            if idx > 0 {
                clause.push_str(", ");
            }
            let placeholder = format!(":{name}");
            clause.push_str(name);
            clause.push_str(" = ");
            clause.push_str(&placeholder);
            values.insert(placeholder.clone(), value.clone());
            assignments.push((name.clone(), placeholder));
        }

        Self {
            clause,
            assignments,
            values,
        }
    }

    /// The update clause, e.g. `set name = :name, age = :age`
    pub fn clause(&self) -> &str {
        &self.clause
    }

    /// Placeholder to value mapping referenced by the clause
    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// `(attribute name, placeholder)` pairs in clause order.
    pub fn assignments(&self) -> impl Iterator<Item = (&str, &str)> {
        self.assignments
            .iter()
            .map(|(name, placeholder)| (name.as_str(), placeholder.as_str()))
    }
}

#[cfg(test)]
mod test {
    use super::UpdateOperation;
    use serde_json::{json, Map, Value};

    fn attributes(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_clause_and_placeholders() {
        let op = UpdateOperation::from_attributes(&attributes(json!({"name": "x", "age": 5})));
        assert_eq!("set name = :name, age = :age", op.clause());
        assert_eq!(&attributes(json!({":name": "x", ":age": 5})), op.values());
        assert_eq!(
            vec![":name", ":age"],
            op.values().keys().map(String::as_str).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_single_attribute() {
        let op = UpdateOperation::from_attributes(&attributes(json!({"status": "done"})));
        assert_eq!("set status = :status", op.clause());
        assert_eq!(1, op.values().len());
    }

    #[test]
    fn test_build_is_deterministic() {
        let attrs = attributes(json!({
            "zeta": 1,
            "alpha": [1, 2, 3],
            "middle": {"nested": true},
            "last": null,
        }));
        let first = UpdateOperation::from_attributes(&attrs);
        let second = UpdateOperation::from_attributes(&attrs);
        assert_eq!(first.clause(), second.clause());
        assert_eq!(first, second);
        // body order is kept, not sorted
        assert_eq!(
            "set zeta = :zeta, alpha = :alpha, middle = :middle, last = :last",
            first.clause()
        );
    }

    #[test]
    fn test_reserved_names_are_not_escaped() {
        let op = UpdateOperation::from_attributes(&attributes(json!({"name": "x", "data": 1})));
        assert_eq!("set name = :name, data = :data", op.clause());
    }

    #[test]
    fn test_assignments() {
        let op = UpdateOperation::from_attributes(&attributes(json!({"name": "x", "age": 5})));
        assert_eq!(
            vec![("name", ":name"), ("age", ":age")],
            op.assignments().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_assignments_keep_names_with_separators() {
        let op = UpdateOperation::from_attributes(&attributes(json!({"a, b = c": 1, "x": 2})));
        assert_eq!(
            vec![("a, b = c", ":a, b = c"), ("x", ":x")],
            op.assignments().collect::<Vec<_>>()
        );
        assert_eq!(2, op.values().len());
    }
}
