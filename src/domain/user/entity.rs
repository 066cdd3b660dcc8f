// src/domain/user/entity.rs
use crate::domain::user::value_objects::{EmailAddress, Role, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: Option<EmailAddress>,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn is_journalist(&self) -> bool {
        self.role == Role::Journalist
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub email: Option<EmailAddress>,
    pub role: Role,
    pub api_token: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        username: Username,
        email: Option<EmailAddress>,
        role: Role,
        api_token: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username,
            email,
            role,
            api_token,
            is_active: true,
            created_at,
        }
    }
}
