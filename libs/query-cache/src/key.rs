//! Tuple-shaped cache keys.
//!
//! A key is `(resource, scope, id)` rendered as `resource:scope[:id]`, e.g.
//! `comments:video:v1` or `comments:all`. The `resource` names the record
//! family, the `scope` narrows it (`all`, `user`, `video`, `tag`, `id`), and
//! the optional `id` pins a concrete instance.

use std::fmt;

/// Cache key for a query result
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub resource: &'static str,
    pub scope: &'static str,
    pub id: Option<String>,
}

impl QueryKey {
    /// Key for a resource-wide scope with no instance id, e.g. `("comments", "all")`
    pub fn new(resource: &'static str, scope: &'static str) -> Self {
        Self {
            resource,
            scope,
            id: None,
        }
    }

    /// Key narrowed to a concrete instance, e.g. `("comments", "video", "v1")`
    pub fn scoped(resource: &'static str, scope: &'static str, id: impl Into<String>) -> Self {
        Self {
            resource,
            scope,
            id: Some(id.into()),
        }
    }

    /// Whether this key belongs to the given resource family
    pub fn is_resource(&self, resource: &str) -> bool {
        self.resource == resource
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{}:{}:{}", self.resource, self.scope, id),
            None => write!(f, "{}:{}", self.resource, self.scope),
        }
    }
}
