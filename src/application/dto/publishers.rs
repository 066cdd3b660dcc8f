// src/application/dto/publishers.rs
use crate::domain::publisher::Publisher;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublisherDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub is_active: bool,
    pub subscriber_count: u64,
    pub created_at: DateTime<Utc>,
}

impl PublisherDto {
    pub fn from_parts(publisher: Publisher, subscriber_count: u64) -> Self {
        Self {
            id: publisher.id.into(),
            name: publisher.name.into(),
            description: publisher.description.into(),
            website: publisher.website,
            is_active: publisher.is_active,
            subscriber_count,
            created_at: publisher.created_at,
        }
    }
}
