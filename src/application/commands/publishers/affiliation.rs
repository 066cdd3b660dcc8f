// src/application/commands/publishers/affiliation.rs
use super::PublisherCommandService;
use crate::application::commands::ensure_capability;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        publisher::{AffiliationKind, PublisherId},
        user::{Role, UserId},
    },
};

pub struct AddAffiliationCommand {
    pub publisher_id: i64,
    pub user_id: i64,
    pub kind: String,
}

impl PublisherCommandService {
    /// Attaches staff to a publisher. The affiliation kind has to line up
    /// with the user's role so an editor desk never contains writers and
    /// vice versa; admins can sit on either side.
    pub async fn add_affiliation(
        &self,
        actor: &AuthenticatedUser,
        command: AddAffiliationCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "publishers", "manage")?;

        let publisher_id = PublisherId::new(command.publisher_id)?;
        let user_id = UserId::new(command.user_id)?;
        let kind = command.kind.parse::<AffiliationKind>()?;

        self.publisher_repo
            .find_by_id(publisher_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("publisher not found"))?;
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let fits = match kind {
            AffiliationKind::Editor => matches!(user.role, Role::Editor | Role::Admin),
            AffiliationKind::Journalist => matches!(user.role, Role::Journalist | Role::Admin),
        };
        if !fits {
            return Err(ApplicationError::invalid_target(
                "affiliation kind must match the user's role",
            ));
        }

        self.publisher_repo
            .add_affiliation(publisher_id, user_id, kind)
            .await?;
        Ok(())
    }
}
