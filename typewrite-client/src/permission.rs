//! Permission option sets and their compilation to permission expressions.

use serde::{Deserialize, Serialize};

use crate::role::RoleString;

/// An action a permission grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionAction {
    Read,
    Write,
    Delete,
    Update,
}

impl PermissionAction {
    /// Emission order of the permission compiler.
    pub const ORDER: [PermissionAction; 4] = [
        PermissionAction::Read,
        PermissionAction::Write,
        PermissionAction::Delete,
        PermissionAction::Update,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionAction::Read => "read",
            PermissionAction::Write => "write",
            PermissionAction::Delete => "delete",
            PermissionAction::Update => "update",
        }
    }

    /// Permission expression for this action and role, e.g. `read("any")`.
    pub fn expression(&self, role: &RoleString) -> String {
        format!("{}(\"{}\")", self.as_str(), role.as_str())
    }
}

/// Roles granted each action.
///
/// Unknown keys are ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermissionOptions {
    pub read: Vec<RoleString>,
    pub write: Vec<RoleString>,
    pub delete: Vec<RoleString>,
    pub update: Vec<RoleString>,
}

impl PermissionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(mut self, role: impl Into<RoleString>) -> Self {
        self.read.push(role.into());
        self
    }

    pub fn write(mut self, role: impl Into<RoleString>) -> Self {
        self.write.push(role.into());
        self
    }

    pub fn delete(mut self, role: impl Into<RoleString>) -> Self {
        self.delete.push(role.into());
        self
    }

    pub fn update(mut self, role: impl Into<RoleString>) -> Self {
        self.update.push(role.into());
        self
    }

    /// Roles granted a given action.
    pub fn roles(&self, action: PermissionAction) -> &[RoleString] {
        match action {
            PermissionAction::Read => &self.read,
            PermissionAction::Write => &self.write,
            PermissionAction::Delete => &self.delete,
            PermissionAction::Update => &self.update,
        }
    }

    pub fn is_empty(&self) -> bool {
        PermissionAction::ORDER
            .iter()
            .all(|action| self.roles(*action).is_empty())
    }
}

/// Compile permission options into permission expressions.
///
/// Actions are emitted in the order read, write, delete, update; roles keep
/// their given order. Role strings are not checked.
pub fn build_permissions(options: &PermissionOptions) -> Vec<String> {
    PermissionAction::ORDER
        .iter()
        .flat_map(|action| {
            options
                .roles(*action)
                .iter()
                .map(move |role| action.expression(role))
        })
        .collect()
}
