// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

//! Client-side routing over URL fragment identifiers.
//!
//! A fragment such as `#person/123/view?foo=1&bar=a` encodes a resource name,
//! an optional id, an optional verb and a query string. [`parse`] breaks it
//! into a [`RouteDescriptor`] whose `path` is a template (`/person/:id/view`)
//! suitable for route-table lookups, and [`params`] extracts only the query.

mod error;
mod fragment;
mod query;
mod routes;

pub use error::InvalidFragment;
pub use fragment::{parse, route_path, RouteDescriptor, ID_PLACEHOLDER};
pub use query::{params, Query};
pub use routes::{parse_config, Resolved, RouteTable, DEFAULT_CONFIG_PATH};
