use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role assigned to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    #[default]
    Staff,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::Staff];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Staff => "staff",
        }
    }

    /// Whether this role may open `module` at all.
    pub fn can_access(&self, module: Module) -> bool {
        match module {
            Module::Dashboard | Module::Inventory | Module::Sales => true,
            Module::Hr | Module::Finance => matches!(self, Role::Admin | Role::Manager),
        }
    }

    /// Modules visible to this role, in navigation order.
    pub fn visible_modules(&self) -> Vec<Module> {
        Module::ALL.into_iter().filter(|m| self.can_access(*m)).collect()
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "staff" => Ok(Role::Staff),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

/// Functional area of the ERP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Module {
    Dashboard,
    Hr,
    Inventory,
    Sales,
    Finance,
}

impl Module {
    pub const ALL: [Module; 5] = [
        Module::Dashboard,
        Module::Hr,
        Module::Inventory,
        Module::Sales,
        Module::Finance,
    ];

    /// Prefix used by this module's permissions (`"<key>.read"`).
    pub fn key(&self) -> &'static str {
        match self {
            Module::Dashboard => "dashboard",
            Module::Hr => "hr",
            Module::Inventory => "inventory",
            Module::Sales => "sales",
            Module::Finance => "finance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Module::Dashboard => "Dashboard",
            Module::Hr => "HR",
            Module::Inventory => "Inventory",
            Module::Sales => "Sales",
            Module::Finance => "Finance",
        }
    }
}

impl core::fmt::Display for Module {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
