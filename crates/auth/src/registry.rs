//! Role → permission mapping (static policy source).

use std::collections::{HashMap, HashSet};

use crate::{Permission, Role};

/// Default role names seeded by [`RolePermissionRegistry::with_defaults`].
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";
pub const ROLE_GUEST: &str = "guest";

/// Registry answering "does role R grant permission P".
///
/// Backed by a fixed mapping seeded at startup. Lookup of an unknown role
/// yields the empty permission set — never an error and never a fallback to
/// a privileged role. Immutable after construction, so concurrent reads need
/// no synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePermissionRegistry {
    grants: HashMap<Role, HashSet<Permission>>,
    empty: HashSet<Permission>,
}

impl RolePermissionRegistry {
    /// Build a registry from a role → permissions mapping.
    ///
    /// The mapping is data: deployments typically deserialize it from
    /// configuration (`HashMap<Role, Vec<Permission>>` works directly with
    /// serde) rather than editing code.
    pub fn from_mapping(mapping: impl IntoIterator<Item = (Role, Vec<Permission>)>) -> Self {
        let grants = mapping
            .into_iter()
            .map(|(role, perms)| (role, perms.into_iter().collect()))
            .collect();

        Self {
            grants,
            empty: HashSet::new(),
        }
    }

    /// Minimal viable default mapping.
    ///
    /// `admin` gets full CRUD, `user` gets read/update, `guest` gets read.
    /// Real deployments override via [`Self::from_mapping`].
    pub fn with_defaults() -> Self {
        Self::from_mapping([
            (
                Role::new(ROLE_ADMIN),
                vec![
                    Permission::CREATE,
                    Permission::READ,
                    Permission::UPDATE,
                    Permission::DELETE,
                ],
            ),
            (
                Role::new(ROLE_USER),
                vec![Permission::READ, Permission::UPDATE],
            ),
            (Role::new(ROLE_GUEST), vec![Permission::READ]),
        ])
    }

    /// Does `role` grant `permission`?
    ///
    /// A role holding the wildcard permission `"*"` grants everything.
    pub fn grants(&self, role: &Role, permission: &Permission) -> bool {
        let perms = self.permissions_of(role);
        perms.contains(permission) || perms.iter().any(Permission::is_wildcard)
    }

    /// Permission set granted to `role` (empty for unknown roles).
    pub fn permissions_of(&self, role: &Role) -> &HashSet<Permission> {
        self.grants.get(role).unwrap_or(&self.empty)
    }
}

impl Default for RolePermissionRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_give_admin_full_crud() {
        let registry = RolePermissionRegistry::with_defaults();
        let admin = Role::new(ROLE_ADMIN);

        for perm in [
            Permission::CREATE,
            Permission::READ,
            Permission::UPDATE,
            Permission::DELETE,
        ] {
            assert!(registry.grants(&admin, &perm));
        }
    }

    #[test]
    fn defaults_restrict_user_and_guest() {
        let registry = RolePermissionRegistry::with_defaults();

        let user = Role::new(ROLE_USER);
        assert!(registry.grants(&user, &Permission::READ));
        assert!(registry.grants(&user, &Permission::UPDATE));
        assert!(!registry.grants(&user, &Permission::CREATE));
        assert!(!registry.grants(&user, &Permission::DELETE));

        let guest = Role::new(ROLE_GUEST);
        assert!(registry.grants(&guest, &Permission::READ));
        assert!(!registry.grants(&guest, &Permission::UPDATE));
        assert!(!registry.grants(&guest, &Permission::CREATE));
        assert!(!registry.grants(&guest, &Permission::DELETE));
    }

    #[test]
    fn unknown_role_is_fail_closed() {
        let registry = RolePermissionRegistry::with_defaults();
        let stranger = Role::new("superuser");

        assert!(registry.permissions_of(&stranger).is_empty());
        for perm in [
            Permission::CREATE,
            Permission::READ,
            Permission::UPDATE,
            Permission::DELETE,
            Permission::new("*"),
        ] {
            assert!(!registry.grants(&stranger, &perm));
        }
    }

    #[test]
    fn wildcard_grants_everything() {
        let registry = RolePermissionRegistry::from_mapping([(
            Role::new("root"),
            vec![Permission::new("*")],
        )]);

        let root = Role::new("root");
        assert!(registry.grants(&root, &Permission::DELETE));
        assert!(registry.grants(&root, &Permission::new("ledger.close")));
    }

    #[test]
    fn mapping_deserializes_from_config_data() {
        let raw = r#"{"auditor": ["read", "reports.export"]}"#;
        let mapping: HashMap<Role, Vec<Permission>> = serde_json::from_str(raw).unwrap();
        let registry = RolePermissionRegistry::from_mapping(mapping);

        let auditor = Role::new("auditor");
        assert!(registry.grants(&auditor, &Permission::READ));
        assert!(registry.grants(&auditor, &Permission::new("reports.export")));
        assert!(!registry.grants(&auditor, &Permission::DELETE));
    }
}
