//! Role strings naming the principals a permission applies to.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a role string does not follow the role grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid role string '{0}' (expected any, guests, users, user:<id>, team:<id>:<role> or label:<name>)")]
pub struct RoleError(pub String);

/// A principal or principal class.
///
/// Renders to the role grammar:
/// `any`, `guests`, `users`, `user:<id>`, `team:<id>:<role>`, `label:<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    /// Any user, authenticated or not.
    Any,
    /// Any unauthenticated user.
    Guests,
    /// Any authenticated user.
    Users,
    /// A specific user by id.
    User(String),
    /// A specific team and team role.
    Team { team_id: String, role: String },
    /// Users carrying a label.
    Label(String),
}

impl Role {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn guests() -> Self {
        Self::Guests
    }

    pub fn users() -> Self {
        Self::Users
    }

    pub fn user(id: impl Into<String>) -> Self {
        Self::User(id.into())
    }

    pub fn team(team_id: impl Into<String>, role: impl Into<String>) -> Self {
        Self::Team {
            team_id: team_id.into(),
            role: role.into(),
        }
    }

    pub fn label(name: impl Into<String>) -> Self {
        Self::Label(name.into())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Any => f.write_str("any"),
            Role::Guests => f.write_str("guests"),
            Role::Users => f.write_str("users"),
            Role::User(id) => write!(f, "user:{}", id),
            Role::Team { team_id, role } => write!(f, "team:{}:{}", team_id, role),
            Role::Label(name) => write!(f, "label:{}", name),
        }
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RoleError(s.to_string());
        match s {
            "any" => return Ok(Role::Any),
            "guests" => return Ok(Role::Guests),
            "users" => return Ok(Role::Users),
            _ => {}
        }

        let (kind, rest) = s.split_once(':').ok_or_else(invalid)?;
        if rest.is_empty() {
            return Err(invalid());
        }
        match kind {
            "user" => Ok(Role::User(rest.to_string())),
            "label" => Ok(Role::Label(rest.to_string())),
            "team" => match rest.split_once(':') {
                Some((team_id, role)) if !team_id.is_empty() && !role.is_empty() => {
                    Ok(Role::team(team_id, role))
                }
                _ => Err(invalid()),
            },
            _ => Err(invalid()),
        }
    }
}

/// A role string as handed to the permission compiler.
///
/// Construction through `From` does not check the grammar; the compiler
/// forwards whatever it is given. Use [`RoleString::parse`] or build from a
/// [`Role`] to get a string that is known to be well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleString(String);

impl RoleString {
    /// Parse and check a role string against the role grammar.
    pub fn parse(s: &str) -> Result<Self, RoleError> {
        s.parse::<Role>().map(Self::from)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The typed role, if this string follows the grammar.
    pub fn role(&self) -> Option<Role> {
        self.0.parse().ok()
    }
}

impl fmt::Display for RoleString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Role> for RoleString {
    fn from(role: Role) -> Self {
        Self(role.to_string())
    }
}

impl From<&str> for RoleString {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RoleString {
    fn from(s: String) -> Self {
        Self(s)
    }
}
