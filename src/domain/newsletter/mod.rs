// src/domain/newsletter/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{Frequency, NewNewsletter, Newsletter, NewsletterId};
pub use repository::NewsletterRepository;
