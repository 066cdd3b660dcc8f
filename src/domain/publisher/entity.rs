// src/domain/publisher/entity.rs
use crate::domain::errors::DomainError;
use crate::domain::publisher::value_objects::{PublisherDescription, PublisherId, PublisherName};
use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone)]
pub struct Publisher {
    pub id: PublisherId,
    pub name: PublisherName,
    pub description: PublisherDescription,
    pub website: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPublisher {
    pub name: PublisherName,
    pub description: PublisherDescription,
    pub website: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl NewPublisher {
    pub fn new(
        name: PublisherName,
        description: PublisherDescription,
        website: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name,
            description,
            website,
            is_active: true,
            created_at,
        }
    }
}

/// Staff relation between a publisher and a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffiliationKind {
    Editor,
    Journalist,
}

impl AffiliationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AffiliationKind::Editor => "editor",
            AffiliationKind::Journalist => "journalist",
        }
    }
}

impl fmt::Display for AffiliationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AffiliationKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "editor" => Ok(AffiliationKind::Editor),
            "journalist" => Ok(AffiliationKind::Journalist),
            other => Err(DomainError::Validation(format!(
                "unknown affiliation kind '{other}'"
            ))),
        }
    }
}
