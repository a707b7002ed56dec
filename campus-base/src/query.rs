// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

//! # List filters
//!
//! Exact-match filters shared by the course and student collections. Every
//! given filter must hold (AND); unknown query parameters are dropped when
//! the filter is deserialized.

use rusqlite::types::Value;
use serde::Deserialize;

use crate::model::Id;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ListFilter {
    pub id: Option<Id>,
    pub name: Option<String>,
}

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: Id) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_owned());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_none()
    }

    /// SQL `WHERE` clause (empty when there is nothing to filter) and its
    /// positional parameters.
    pub fn where_clause(&self) -> (String, Vec<Value>) {
        if self.is_empty() {
            return (String::new(), vec![]);
        }

        let mut conditions = vec![];
        let mut params = vec![];

        if let Some(id) = self.id {
            params.push(Value::Integer(id));
            conditions.push(format!("id = ?{}", params.len()));
        }

        if let Some(name) = &self.name {
            params.push(Value::Text(name.clone()));
            conditions.push(format!("name = ?{}", params.len()));
        }

        (format!(" WHERE {}", conditions.join(" AND ")), params)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_empty_filter() {
        let filter = ListFilter::new();
        assert!(filter.is_empty());
        let (clause, params) = filter.where_clause();
        assert!(clause.is_empty());
        assert!(params.is_empty());
    }

    #[test]
    fn test_filters_are_anded() {
        let filter = ListFilter::new().with_id(7).with_name("Test Course");
        let (clause, params) = filter.where_clause();
        assert_eq!(clause, " WHERE id = ?1 AND name = ?2");
        assert_eq!(
            params,
            vec![Value::Integer(7), Value::Text("Test Course".to_owned())]
        );

        let (clause, _) = ListFilter::new().with_name("x").where_clause();
        assert_eq!(clause, " WHERE name = ?1");
    }

    #[test]
    fn test_unknown_parameters_ignored() {
        let filter: ListFilter = serde_json::from_value(
            json!({ "name": "Algebra", "ordering": "-id" }),
        )
        .unwrap();
        assert_eq!(filter, ListFilter::new().with_name("Algebra"));
    }
}
