use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Permission identifier.
///
/// Permissions are modeled as opaque strings. Flat capability names
/// (`"read"`) and resource-scoped names (`"inventory.read"`) are both valid;
/// the registry treats them uniformly. A special wildcard permission `"*"`
/// indicates "allow all" without hardcoding domain permissions into roles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    /// Create a new resource.
    pub const CREATE: Permission = Permission(Cow::Borrowed("create"));
    /// View/list a resource.
    pub const READ: Permission = Permission(Cow::Borrowed("read"));
    /// Modify an existing resource.
    pub const UPDATE: Permission = Permission(Cow::Borrowed("update"));
    /// Remove a resource.
    pub const DELETE: Permission = Permission(Cow::Borrowed("delete"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_wildcard(&self) -> bool {
        self.as_str() == "*"
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Permission {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}
