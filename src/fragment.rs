// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    error::{check_fragment, InvalidFragment},
    query::Query,
};

/// Placeholder standing in for the resource id in [`RouteDescriptor::path`].
pub const ID_PLACEHOLDER: &str = ":id";

/// A fragment such as `#person/123/view?foo=1&bar=a`, broken down into its
/// route parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// First segment, taken verbatim. When the fragment has a single segment
    /// any `?query` suffix stays attached here, so `#shop?x=1` gives `shop?x=1`.
    pub name: String,

    /// Second segment without its `?query` suffix, or empty.
    pub id: String,

    /// Third segment without its `?query` suffix, or empty.
    pub verb: String,

    pub query: Query,

    /// Route template, e.g. `/person/:id/view`. Never holds the id value.
    pub path: String,
}

impl FromStr for RouteDescriptor {
    type Err = InvalidFragment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parse the fragment identifier of a URL, `#` included.
///
/// Blank input is read as `#`. Anything else must start with `#` and must not
/// start with `#/`.
///
/// ```
/// let route = hashroute::parse("#person/123/view?foo=1&bar=a").unwrap();
/// assert_eq!(route.name, "person");
/// assert_eq!(route.id, "123");
/// assert_eq!(route.verb, "view");
/// assert_eq!(route.query.get("bar"), Some("a"));
/// assert_eq!(route.path, "/person/:id/view");
/// ```
pub fn parse(fragment: &str) -> Result<RouteDescriptor, InvalidFragment> {
    let fragment = if fragment.trim_matches(is_blank).is_empty() {
        "#"
    } else {
        fragment
    };
    check_fragment(fragment)?;

    let url = &fragment[1..];

    let mut parts = url.split('/');
    let name = parts.next().unwrap_or_default();
    let id = parts.next().map(strip_query).unwrap_or_default();
    let verb = parts.next().map(strip_query).unwrap_or_default();

    let path = route_path(name, id, verb);

    let (query, path) = match url.split_once('?') {
        Some((_, query)) => {
            let path = match strip_query(&path) {
                "" => "/".to_string(),
                stripped => stripped.to_string(),
            };
            (Query::parse(query), path)
        }
        None => (Query::new(), path),
    };

    let route = RouteDescriptor {
        name: name.to_string(),
        id: id.to_string(),
        verb: verb.to_string(),
        query,
        path,
    };
    tracing::trace!(fragment, path = %route.path, "parsed fragment");
    Ok(route)
}

/// Build the route template for the given segments: `/name`, then `/:id` and
/// `/verb` when present.
pub fn route_path(name: &str, id: &str, verb: &str) -> String {
    let mut path = String::from("/");
    path.push_str(name);
    if !id.is_empty() {
        path.push('/');
        path.push_str(ID_PLACEHOLDER);
    }
    if !verb.is_empty() {
        path.push('/');
        path.push_str(verb);
    }
    path
}

/// Whitespace per the ECMAScript `trim` definition: the byte order mark counts,
/// NEL (U+0085) does not.
fn is_blank(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

fn strip_query(segment: &str) -> &str {
    segment.split_once('?').map_or(segment, |(head, _)| head)
}
