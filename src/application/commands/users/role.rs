// src/application/commands/users/role.rs
use super::UserCommandService;
use crate::application::commands::ensure_capability;
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Role, UserId},
};

pub struct SetUserRoleCommand {
    pub user_id: i64,
    pub role: String,
}

impl UserCommandService {
    pub async fn set_user_role(
        &self,
        actor: &AuthenticatedUser,
        command: SetUserRoleCommand,
    ) -> ApplicationResult<UserDto> {
        ensure_capability(actor, "users", "manage")?;

        let user_id = UserId::new(command.user_id)?;
        let role = command.role.parse::<Role>()?;

        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let user = self.user_repo.set_role(user_id, role).await?;
        Ok(user.into())
    }
}
