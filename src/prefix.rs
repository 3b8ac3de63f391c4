// Copyright © 2024 DocNav. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Route Prefix Maps
//!
//! Ordered maps keyed by URL path prefix, probed by longest-prefix match.
//! Both the sidebar and the per-path OG image templates are stored this way.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Normalizes a route key by trimming trailing slashes. The root `/` (and
/// any run of slashes) normalizes to `/`.
///
/// ```
/// use docnav::prefix::normalize_key;
///
/// assert_eq!(normalize_key("/meta-infra/"), "/meta-infra");
/// assert_eq!(normalize_key("/"), "/");
/// ```
pub fn normalize_key(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() && raw.trim().starts_with('/') {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Values registered under path prefixes, in registration order.
///
/// Keys are unique; uniqueness is established by validation before a map is
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMap<T> {
    entries: Vec<(String, T)>,
}

impl<T> PrefixMap<T> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers `value` under `key`. Returns `false` and leaves the map
    /// unchanged if the key is already present.
    pub(crate) fn insert(&mut self, key: String, value: T) -> bool {
        if self.get(&key).is_some() {
            return false;
        }
        self.entries.push((key, value));
        true
    }

    /// Exact lookup by normalized key.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Finds the longest key that is a prefix of `path`.
    pub fn longest_match(&self, path: &str) -> Option<(&str, &T)> {
        self.entries
            .iter()
            .filter(|(key, _)| path.starts_with(key.as_str()))
            .max_by_key(|(key, _)| key.len())
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Registered keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Key/value pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for PrefixMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize> Serialize for PrefixMap<T> {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routes(keys: &[&str]) -> PrefixMap<String> {
        let mut map = PrefixMap::new();
        for key in keys {
            assert!(map.insert(key.to_string(), format!("entries of {key}")));
        }
        map
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("/sdk"), "/sdk");
        assert_eq!(normalize_key("/sdk///"), "/sdk");
        assert_eq!(normalize_key("//"), "/");
        assert_eq!(normalize_key(" /wallet/ "), "/wallet");
        assert_eq!(normalize_key("docs/"), "docs");
    }

    #[test]
    fn test_longest_match_picks_most_specific() {
        let map = routes(&["/", "/sdk", "/sdk/permissions"]);
        let (key, _) = map.longest_match("/sdk/permissions/intro").unwrap();
        assert_eq!(key, "/sdk/permissions");
        let (key, _) = map.longest_match("/sdk/setup").unwrap();
        assert_eq!(key, "/sdk");
        let (key, _) = map.longest_match("/wallet").unwrap();
        assert_eq!(key, "/");
    }

    #[test]
    fn test_longest_match_is_independent_of_order() {
        let map = routes(&["/sdk/permissions", "/", "/sdk"]);
        let (key, _) = map.longest_match("/sdk/permissions").unwrap();
        assert_eq!(key, "/sdk/permissions");
    }

    #[test]
    fn test_no_match() {
        let map = routes(&["/sdk"]);
        assert!(map.longest_match("/wallet").is_none());
        assert!(map.longest_match("").is_none());
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut map = routes(&["/meta-infra"]);
        assert!(!map.insert("/meta-infra".to_string(), String::new()));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_serializes_in_registration_order() {
        let map = routes(&["/wallet", "/"]);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(
            json,
            r#"{"/wallet":"entries of /wallet","/":"entries of /"}"#
        );
    }
}
