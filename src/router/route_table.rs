use std::collections::HashSet;

use crate::shared::errors::RouteConfigError;
use crate::shared::logging::log_route_resolve;

/// Binding of a URL path to a page component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry<C> {
    pub path: String,
    pub name: String,
    pub component: C,
}

impl<C> RouteEntry<C> {
    pub fn new(path: impl Into<String>, name: impl Into<String>, component: C) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            component,
        }
    }
}

/// Immutable, validated list of routes.
///
/// Paths and names are unique and every path starts with `/`; a table that
/// breaks either rule is refused at construction.
#[derive(Debug, Clone)]
pub struct RouteTable<C> {
    entries: Vec<RouteEntry<C>>,
}

impl<C> RouteTable<C> {
    pub fn new(entries: Vec<RouteEntry<C>>) -> Result<Self, RouteConfigError> {
        validate(&entries)?;
        Ok(Self { entries })
    }

    /// Exact match on `path`, in table order
    pub fn resolve(&self, path: &str) -> Option<&RouteEntry<C>> {
        let found = self.entries.iter().find(|entry| entry.path == path);
        log_route_resolve(path, found.map(|entry| entry.name.as_str()));
        found
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteEntry<C>> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn entries(&self) -> &[RouteEntry<C>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate<C>(entries: &[RouteEntry<C>]) -> Result<(), RouteConfigError> {
    let mut paths = HashSet::new();
    let mut names = HashSet::new();

    for entry in entries {
        if !entry.path.starts_with('/') {
            return Err(RouteConfigError::InvalidPath(entry.path.clone()));
        }
        if !paths.insert(entry.path.as_str()) {
            return Err(RouteConfigError::DuplicatePath(entry.path.clone()));
        }
        if !names.insert(entry.name.as_str()) {
            return Err(RouteConfigError::DuplicateName(entry.name.clone()));
        }
    }
    Ok(())
}
