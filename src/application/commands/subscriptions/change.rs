// src/application/commands/subscriptions/change.rs
use super::SubscriptionCommandService;
use crate::application::commands::ensure_capability;
use crate::{
    application::{
        dto::{AuthenticatedUser, SubscriptionChangeDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{publisher::PublisherId, subscription::SubscriptionTarget, user::UserId},
};

/// Exactly one of the two targets must be set.
pub struct ChangeSubscriptionCommand {
    pub publisher_id: Option<i64>,
    pub journalist_id: Option<i64>,
}

impl SubscriptionCommandService {
    pub async fn subscribe(
        &self,
        actor: &AuthenticatedUser,
        command: ChangeSubscriptionCommand,
    ) -> ApplicationResult<SubscriptionChangeDto> {
        ensure_capability(actor, "subscriptions", "manage")?;
        let target = self.resolve_target(command).await?;

        let changed = match target {
            SubscriptionTarget::Publisher(id) => {
                self.subscription_repo
                    .subscribe_publisher(actor.id, id)
                    .await?
            }
            SubscriptionTarget::Journalist(id) => {
                self.subscription_repo
                    .subscribe_journalist(actor.id, id)
                    .await?
            }
        };

        self.snapshot(actor.id, changed).await
    }

    pub async fn unsubscribe(
        &self,
        actor: &AuthenticatedUser,
        command: ChangeSubscriptionCommand,
    ) -> ApplicationResult<SubscriptionChangeDto> {
        ensure_capability(actor, "subscriptions", "manage")?;
        let target = self.resolve_target(command).await?;

        let changed = match target {
            SubscriptionTarget::Publisher(id) => {
                self.subscription_repo
                    .unsubscribe_publisher(actor.id, id)
                    .await?
            }
            SubscriptionTarget::Journalist(id) => {
                self.subscription_repo
                    .unsubscribe_journalist(actor.id, id)
                    .await?
            }
        };

        self.snapshot(actor.id, changed).await
    }

    async fn resolve_target(
        &self,
        command: ChangeSubscriptionCommand,
    ) -> ApplicationResult<SubscriptionTarget> {
        match (command.publisher_id, command.journalist_id) {
            (Some(publisher_id), None) => {
                let id = PublisherId::new(publisher_id)?;
                self.publisher_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("publisher not found"))?;
                Ok(SubscriptionTarget::Publisher(id))
            }
            (None, Some(journalist_id)) => {
                let id = UserId::new(journalist_id)?;
                let user = self
                    .user_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("journalist not found"))?;
                if !user.is_journalist() {
                    return Err(ApplicationError::invalid_target(
                        "subscriptions may only follow journalists",
                    ));
                }
                Ok(SubscriptionTarget::Journalist(id))
            }
            _ => Err(ApplicationError::missing_parameter(
                "provide exactly one of publisher_id or journalist_id",
            )),
        }
    }

    async fn snapshot(
        &self,
        reader_id: UserId,
        changed: bool,
    ) -> ApplicationResult<SubscriptionChangeDto> {
        let subscriptions = self.subscription_repo.subscriptions_for(reader_id).await?;
        Ok(SubscriptionChangeDto {
            changed,
            subscriptions: subscriptions.into(),
        })
    }
}
