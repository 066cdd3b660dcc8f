// src/application/commands/users/mod.rs
mod provision;
mod role;
mod service;

pub use provision::ProvisionUserCommand;
pub use role::SetUserRoleCommand;
pub use service::UserCommandService;
