// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::HeaderMap, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Rejects the request unless a valid bearer token is presented.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

/// For public endpoints that personalize when a token happens to be present.
/// A token that is present but invalid still rejects rather than falling
/// back to anonymous.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

async fn state_from(parts: &mut Parts) -> Result<HttpState, HttpError> {
    let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, &())
        .await
        .map_err(|_| {
            HttpError::from_error(ApplicationError::Infrastructure(
                "application state missing".into(),
            ))
        })?;
    Ok(app_state)
}

async fn identity_from(
    state: &HttpState,
    headers: &HeaderMap,
) -> Result<Option<AuthenticatedUser>, HttpError> {
    let Some(header) = headers.typed_get::<Authorization<Bearer>>() else {
        return Ok(None);
    };
    let user = state
        .services
        .identity_resolver()
        .resolve(header.token())
        .await
        .map_err(HttpError::from_error)?;
    Ok(Some(user))
}

impl FromRequestParts<()> for Authenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &()) -> Result<Self, Self::Rejection> {
        let app_state = state_from(parts).await?;
        match identity_from(&app_state, &parts.headers).await? {
            Some(user) => Ok(Self(user)),
            None => Err(HttpError::from_error(ApplicationError::Unauthorized(
                "bearer token required".into(),
            ))),
        }
    }
}

impl FromRequestParts<()> for MaybeAuthenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &()) -> Result<Self, Self::Rejection> {
        let app_state = state_from(parts).await?;
        let identity = identity_from(&app_state, &parts.headers).await?;
        Ok(Self(identity))
    }
}
