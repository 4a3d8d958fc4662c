//! Axum extractors for admin authentication
//!
//! Generic over any state `S` where `AuthConfig: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::claims::AdminClaims;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::jwt::{extract_bearer_token, validar_token};

/// Authenticated admin extractor.
///
/// Rejects with 401 before the handler runs when the bearer token is
/// missing, malformed, expired, or signed with the wrong secret.
#[derive(Debug)]
pub struct AdminUser(pub AdminClaims);

impl<S> FromRequestParts<S> for AdminUser
where
    AuthConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let config = AuthConfig::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthorization)?;

        let token = extract_bearer_token(auth_header)?;
        let claims = validar_token(&token, &config)?;

        Ok(AdminUser(claims))
    }
}
