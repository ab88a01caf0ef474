//! Query parameter model
//!
//! Typed query parameters and their query-string encoding

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single query parameter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// String value
    Str(String),
    /// Integer value
    Int(i64),
    /// Boolean value
    Bool(bool),
    /// List of strings, comma-joined on the wire
    List(Vec<String>),
}

impl QueryValue {
    /// Encode the value as it appears in the query string
    pub fn encode(&self) -> String {
        match self {
            QueryValue::Str(s) => s.clone(),
            QueryValue::Int(i) => i.to_string(),
            QueryValue::Bool(b) => b.to_string(),
            QueryValue::List(items) => items.join(","),
        }
    }

    /// Coerce the value into list form
    ///
    /// A list passes through unchanged; a string becomes a one-element
    /// list; other scalars become a one-element list of their encoded form.
    pub fn into_list(self) -> QueryValue {
        match self {
            QueryValue::List(_) => self,
            QueryValue::Str(s) => QueryValue::List(vec![s]),
            other => QueryValue::List(vec![other.encode()]),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(value: Vec<String>) -> Self {
        QueryValue::List(value)
    }
}

impl From<Vec<&str>> for QueryValue {
    fn from(value: Vec<&str>) -> Self {
        QueryValue::List(value.into_iter().map(String::from).collect())
    }
}

/// Query parameters for a single API call
///
/// Keys are unique; inserting a key twice keeps the latest value. Built
/// fresh per call and consumed when the request is sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    params: BTreeMap<String, QueryValue>,
}

impl Query {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, replacing any previous value for the key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.params.insert(key.into(), value.into());
    }

    /// Chainable insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get the value for a key, if present
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.params.get(key)
    }

    /// Whether the parameter set is empty
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Coerce the named parameter into list form, if present
    pub fn listify(&mut self, key: &str) {
        if let Some(value) = self.params.remove(key) {
            self.params.insert(key.to_string(), value.into_list());
        }
    }

    /// Encode all parameters as query-string pairs
    ///
    /// Empty lists contribute no pair.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .filter(|(_, value)| !matches!(value, QueryValue::List(items) if items.is_empty()))
            .map(|(key, value)| (key.clone(), value.encode()))
            .collect()
    }
}
