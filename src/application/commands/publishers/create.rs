// src/application/commands/publishers/create.rs
use super::PublisherCommandService;
use crate::application::commands::ensure_capability;
use crate::{
    application::{
        dto::{AuthenticatedUser, PublisherDto},
        error::ApplicationResult,
    },
    domain::publisher::{NewPublisher, PublisherDescription, PublisherName},
};

pub struct CreatePublisherCommand {
    pub name: String,
    pub description: String,
    pub website: Option<String>,
}

impl PublisherCommandService {
    pub async fn create_publisher(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePublisherCommand,
    ) -> ApplicationResult<PublisherDto> {
        ensure_capability(actor, "publishers", "manage")?;

        let name = PublisherName::new(command.name)?;
        let description = PublisherDescription::new(command.description)?;
        let publisher = NewPublisher::new(name, description, command.website, self.clock.now());

        let publisher = self.publisher_repo.insert(publisher).await?;
        Ok(PublisherDto::from_parts(publisher, 0))
    }
}
