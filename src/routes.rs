// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use camino::Utf8Path;
use eyre::{bail, eyre, WrapErr};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::fragment::{self, RouteDescriptor};

pub const DEFAULT_CONFIG_PATH: &str = "./Routes.toml";

/// Maps route templates such as `/person/:id/edit` to handler names.
///
/// ```toml
/// fallback = "not-found"
///
/// [routes]
/// "/" = "home"
/// "/person/:id" = "person-show"
/// ```
#[derive(Deserialize, Debug, Default, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RouteTable {
    /// Handler used when no template matches.
    pub fallback: Option<String>,

    pub routes: IndexMap<String, String>,
}

/// A fragment matched against a [`RouteTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub handler: &'a str,
    pub route: RouteDescriptor,
}

impl RouteTable {
    /// Read and check a route table file.
    pub fn load<P: AsRef<Utf8Path>>(path: P) -> eyre::Result<RouteTable> {
        let path = path.as_ref();
        let config = std::fs::read_to_string(path)
            .wrap_err_with(|| eyre!("failed to read route table `{}`", path))?;
        let table = parse_config(&config)
            .wrap_err_with(|| eyre!("failed to load route table `{}`", path))?;
        tracing::debug!(%path, routes = table.routes.len(), "loaded route table");
        Ok(table)
    }

    pub fn lookup(&self, path: &str) -> Option<&str> {
        self.routes.get(path).map(String::as_str)
    }

    /// Parse `fragment` and find the handler for its route template, falling
    /// back to [`RouteTable::fallback`] when nothing matches.
    pub fn resolve(&self, fragment: &str) -> eyre::Result<Option<Resolved<'_>>> {
        let route = fragment::parse(fragment)?;

        let Some(handler) = self.lookup(&route.path).or(self.fallback.as_deref()) else {
            tracing::debug!(fragment, path = %route.path, "no route matched");
            return Ok(None);
        };

        tracing::debug!(fragment, path = %route.path, handler, "resolved route");
        Ok(Some(Resolved { handler, route }))
    }

    fn check(&self) -> eyre::Result<()> {
        for template in self.routes.keys() {
            if !template.starts_with('/') {
                bail!("route template `{}` must start with `/`", template);
            }
            if template.contains('?') {
                bail!("route template `{}` must not contain a query", template);
            }
        }
        Ok(())
    }
}

pub fn parse_config(config: &str) -> eyre::Result<RouteTable> {
    let table: RouteTable =
        toml::from_str(config).map_err(|e| eyre!("failed to parse route table: {}", e))?;
    table.check()?;
    Ok(table)
}
