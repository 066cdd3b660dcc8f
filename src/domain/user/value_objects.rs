// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("user id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capability {
    pub resource: String,
    pub action: String,
}

impl Capability {
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
        }
    }

    pub fn matches(&self, resource: &str, action: &str) -> bool {
        self.resource == resource && self.action == action
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Reader,
    Journalist,
    Editor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Reader => "reader",
            Role::Journalist => "journalist",
            Role::Editor => "editor",
            Role::Admin => "admin",
        }
    }

    /// Capabilities are derived from the role alone; there is no stored
    /// permission table to drift out of sync.
    pub fn default_capabilities(&self) -> HashSet<Capability> {
        use Capability as Cap;
        let base = [
            Cap::new("subscriptions", "manage"),
            Cap::new("comments", "create"),
            Cap::new("likes", "toggle"),
        ];
        match self {
            Role::Reader => HashSet::from(base),
            Role::Journalist => {
                let mut caps = HashSet::from(base);
                caps.extend([
                    Cap::new("articles", "create"),
                    Cap::new("articles", "update:own"),
                    Cap::new("articles", "delete:own"),
                    Cap::new("articles", "submit"),
                    Cap::new("newsletters", "create"),
                ]);
                caps
            }
            Role::Editor => {
                let mut caps = HashSet::from(base);
                caps.extend([
                    Cap::new("articles", "update:managed"),
                    Cap::new("articles", "delete:managed"),
                    Cap::new("articles", "approve"),
                    Cap::new("articles", "archive"),
                    Cap::new("articles", "feature"),
                    Cap::new("articles", "view:queue"),
                    Cap::new("newsletters", "create"),
                ]);
                caps
            }
            Role::Admin => {
                let mut caps = HashSet::from(base);
                caps.extend([
                    Cap::new("articles", "create"),
                    Cap::new("articles", "update:any"),
                    Cap::new("articles", "delete:any"),
                    Cap::new("articles", "submit"),
                    Cap::new("articles", "approve"),
                    Cap::new("articles", "archive"),
                    Cap::new("articles", "feature"),
                    Cap::new("articles", "view:queue"),
                    Cap::new("newsletters", "create"),
                    Cap::new("users", "manage"),
                    Cap::new("publishers", "manage"),
                ]);
                caps
            }
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Reader
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reader" => Ok(Role::Reader),
            "journalist" => Ok(Role::Journalist),
            "editor" => Ok(Role::Editor),
            "admin" => Ok(Role::Admin),
            other => Err(DomainError::Validation(format!("unknown role '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("username cannot be empty".into()));
        }
        if value.len() < 3 {
            return Err(DomainError::Validation(
                "username must be at least 3 characters long".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation(
                "email address cannot be empty".into(),
            ));
        }
        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(DomainError::Validation(format!(
                "'{trimmed}' is not a valid email address"
            )));
        };
        if local.is_empty() || domain.is_empty() || !domain.contains('.') {
            return Err(DomainError::Validation(format!(
                "'{trimmed}' is not a valid email address"
            )));
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
