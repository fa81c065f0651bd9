use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::roles::{Module, Role};

/// Permission identifier.
///
/// Permissions are strings of the form `"<module>.read"` / `"<module>.write"`.
/// The wildcard `"*"` grants everything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub const WILDCARD: Permission = Permission(Cow::Borrowed("*"));

    pub const HR_READ: Permission = Permission(Cow::Borrowed("hr.read"));
    pub const HR_WRITE: Permission = Permission(Cow::Borrowed("hr.write"));
    pub const INVENTORY_READ: Permission = Permission(Cow::Borrowed("inventory.read"));
    pub const INVENTORY_WRITE: Permission = Permission(Cow::Borrowed("inventory.write"));
    pub const SALES_READ: Permission = Permission(Cow::Borrowed("sales.read"));
    pub const SALES_WRITE: Permission = Permission(Cow::Borrowed("sales.write"));
    pub const FINANCE_READ: Permission = Permission(Cow::Borrowed("finance.read"));
    pub const FINANCE_WRITE: Permission = Permission(Cow::Borrowed("finance.write"));
    pub const DASHBOARD_READ: Permission = Permission(Cow::Borrowed("dashboard.read"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn read(module: Module) -> Self {
        match module {
            Module::Dashboard => Self::DASHBOARD_READ,
            Module::Hr => Self::HR_READ,
            Module::Inventory => Self::INVENTORY_READ,
            Module::Sales => Self::SALES_READ,
            Module::Finance => Self::FINANCE_READ,
        }
    }

    /// Write permission for `module`. The dashboard is read-only, so its
    /// write permission is never granted except through the wildcard.
    pub fn write(module: Module) -> Self {
        match module {
            Module::Dashboard => Self::new("dashboard.write"),
            Module::Hr => Self::HR_WRITE,
            Module::Inventory => Self::INVENTORY_WRITE,
            Module::Sales => Self::SALES_WRITE,
            Module::Finance => Self::FINANCE_WRITE,
        }
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

impl Role {
    /// Permissions granted to this role.
    pub fn permissions(&self) -> Vec<Permission> {
        if *self == Role::Admin {
            return vec![Permission::WILDCARD];
        }

        let mut granted = Vec::new();
        for module in self.visible_modules() {
            granted.push(Permission::read(module));
            if module != Module::Dashboard {
                granted.push(Permission::write(module));
            }
        }
        granted
    }

    pub fn grants(&self, required: &Permission) -> bool {
        self.permissions()
            .iter()
            .any(|p| p.is_wildcard() || p == required)
    }
}
