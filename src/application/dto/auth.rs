// src/application/dto/auth.rs
use crate::domain::user::{Capability, Role, User, UserId};
use std::collections::HashSet;

/// The acting identity attached to a request after token resolution.
/// Capabilities are computed from the role at resolution time.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub role: Role,
    pub capabilities: HashSet<Capability>,
}

impl AuthenticatedUser {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.to_string(),
            role: user.role,
            capabilities: user.role.default_capabilities(),
        }
    }

    pub fn has_capability(&self, resource: &str, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches(resource, action))
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
