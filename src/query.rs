// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use std::{fmt::Display, ops::Index};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::error::{check_fragment, InvalidFragment};

/// Query parameters of a fragment, in order of first appearance.
///
/// A repeated key keeps the position of its first occurrence and the value of
/// its last one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query(IndexMap<String, String>);

impl Query {
    pub fn new() -> Query {
        Query(IndexMap::new())
    }

    /// Decode an `application/x-www-form-urlencoded` string, without its
    /// leading `?`.
    pub fn parse(input: &str) -> Query {
        form_urlencoded::parse(input.as_bytes())
            .into_owned()
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> IndexMap<String, String> {
        self.0
    }
}

impl FromIterator<(String, String)> for Query {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut query = Query::new();
        query.extend(iter);
        query
    }
}

impl Extend<(String, String)> for Query {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.0.insert(k, v);
        }
    }
}

impl IntoIterator for Query {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Index<&str> for Query {
    type Output = str;

    /// Panics if `key` is absent, like `HashMap`.
    fn index(&self, key: &str) -> &str {
        self.0[key].as_str()
    }
}

/// Re-encodes the pairs, e.g. `foo=1&bar=a+b`.
impl Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish();
        f.write_str(&encoded)
    }
}

/// Extract only the query parameters of a fragment such as
/// `#person/123/view?foo=1&bar=a`.
///
/// Returns `Ok(None)` when there is no `?`, or nothing after it. Unlike
/// [`crate::parse`], blank input is not treated as `#` and is rejected.
pub fn params(fragment: &str) -> Result<Option<Query>, InvalidFragment> {
    check_fragment(fragment)?;

    let query = match fragment.split_once('?') {
        Some((_, query)) if !query.is_empty() => query,
        _ => return Ok(None),
    };

    let query = Query::parse(query);
    tracing::trace!(fragment, params = %query, "extracted fragment query");
    Ok(Some(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params() {
        let p = params("#person/123/view?foo=1&bar=a").unwrap().unwrap();
        assert!(p.has("foo"));
        assert_eq!(p.get("foo"), Some("1"));
        assert!(p.has("bar"));
        assert_eq!(p.get("bar"), Some("a"));
        assert!(!p.has("baz"));
        assert_eq!(p.keys().collect::<Vec<_>>(), ["foo", "bar"]);
    }

    #[test]
    fn test_params_absent() {
        assert_eq!(params("#person/123/view?"), Ok(None));
        assert_eq!(params("#person/123/view"), Ok(None));
        assert_eq!(params("#"), Ok(None));
    }

    #[test]
    fn test_params_invalid() {
        assert_eq!(params("#/foo"), Err(InvalidFragment::new("#/foo")));
        assert!(params("/foo").is_err());
        assert!(params("foo?a=1").is_err());
        // no blank-to-`#` default here
        assert!(params("").is_err());
        assert!(params("   ").is_err());
    }

    #[test]
    fn test_params_only_separators() {
        let p = params("#a?&&").unwrap().unwrap();
        assert!(p.is_empty());
    }

    #[test]
    fn test_decoding() {
        let q = Query::parse("name=J%C3%BCrgen+K&empty=&flag&pct=100%25&bad=%zz");
        assert_eq!(q.get("name"), Some("Jürgen K"));
        assert_eq!(q.get("empty"), Some(""));
        assert_eq!(q.get("flag"), Some(""));
        assert_eq!(q.get("pct"), Some("100%"));
        assert_eq!(q.get("bad"), Some("%zz"));
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let q = Query::parse("a=1&b=2&a=3");
        assert_eq!(q.len(), 2);
        assert_eq!(&q["a"], "3");
        assert_eq!(q.iter().collect::<Vec<_>>(), [("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_order_follows_input() {
        let q = Query::parse("z=1&2=two&a=x&1=one");
        assert_eq!(q.keys().collect::<Vec<_>>(), ["z", "2", "a", "1"]);
    }

    #[test]
    fn test_accessors() {
        let mut q = Query::parse("a=1&b=2");
        assert_eq!(q.insert("a", "9"), Some("1".to_string()));
        assert_eq!(q.insert("c", "3"), None);
        assert_eq!(q.values().collect::<Vec<_>>(), ["9", "2", "3"]);

        let pairs: Vec<(String, String)> = q.clone().into_iter().collect();
        assert_eq!(pairs[2], ("c".to_string(), "3".to_string()));

        let inner = q.into_inner();
        assert_eq!(inner.get_index(0), Some((&"a".to_string(), &"9".to_string())));
    }

    #[test]
    fn test_display() {
        let q = Query::parse("foo=1&bar=a%20b&x=%26");
        assert_eq!(q.to_string(), "foo=1&bar=a+b&x=%26");
        assert_eq!(Query::new().to_string(), "");
    }
}
