// src/application/dto/mod.rs
pub mod articles;
pub mod auth;
pub mod engagement;
pub mod newsletters;
pub mod pagination;
pub mod publishers;
pub mod subscriptions;
pub mod users;

pub use articles::ArticleDto;
pub use auth::AuthenticatedUser;
pub use engagement::{CommentDto, LikeStateDto};
pub use newsletters::NewsletterDto;
pub use pagination::CursorPage;
pub use publishers::PublisherDto;
pub use subscriptions::{SubscriptionChangeDto, SubscriptionsDto};
pub use users::{CapabilityView, JournalistDto, ProvisionedUserDto, UserDto, UserProfileDto};
