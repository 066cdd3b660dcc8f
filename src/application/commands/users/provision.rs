// src/application/commands/users/provision.rs
use uuid::Uuid;

use super::UserCommandService;
use crate::application::commands::ensure_capability;
use crate::{
    application::{
        dto::{AuthenticatedUser, ProvisionedUserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{EmailAddress, NewUser, Role, Username},
};

pub struct ProvisionUserCommand {
    pub username: String,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl UserCommandService {
    /// Accounts are handed out by operators, not self-registered. The
    /// issued token is returned exactly once and never readable again.
    pub async fn provision_user(
        &self,
        actor: &AuthenticatedUser,
        command: ProvisionUserCommand,
    ) -> ApplicationResult<ProvisionedUserDto> {
        ensure_capability(actor, "users", "manage")?;

        let username = Username::new(command.username)?;
        let email = command.email.map(EmailAddress::new).transpose()?;
        let role = match command.role {
            Some(name) => name.parse::<Role>()?,
            None => Role::default(),
        };

        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }

        let api_token = Uuid::new_v4().simple().to_string();
        let new_user = NewUser::new(username, email, role, api_token.clone(), self.clock.now());
        let user = self.user_repo.insert(new_user).await?;

        Ok(ProvisionedUserDto {
            user: user.into(),
            api_token,
        })
    }
}
