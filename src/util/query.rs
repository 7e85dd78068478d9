//! Lenient URL query parsing for route parameters.
//!
//! Browsers hand pages whatever query the previous hop produced. Parsing
//! mirrors `URLSearchParams.get`: the first value of a repeated key wins and
//! invalid percent-escapes decode to U+FFFD instead of rejecting the query.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::collections::HashMap;

use url::form_urlencoded;

/// First value per key of a decoded query string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: HashMap<String, String>,
}

impl QueryParams {
    /// Parse `query`, with or without its leading `?`.
    pub fn parse(query: &str) -> Self {
        let mut values = HashMap::new();
        let query = query.trim_start_matches('?');
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            values.entry(key.into_owned()).or_insert_with(|| value.into_owned());
        }
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Remove and return the value for `key`.
    pub fn take(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }
}
