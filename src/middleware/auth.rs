//! Authentication middleware
//!
//! Session handling for the contest view path. Sessions are JWTs issued by
//! the platform's auth service; this service only verifies them. The
//! `AuthenticatedUser` extractor rejects with `Unauthorized` before any
//! handler code runs, so unauthenticated callers get a uniform 401 whether
//! or not the requested contest exists.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{error::AppError, state::AppState};

/// JWT claims issued by the platform auth service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub username: String,
    pub role: String,
    pub exp: usize,
}

/// Verify a session token and return its claims
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;

    Ok(data.claims)
}

/// Authenticated user extracted from the session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub username: String,
    pub role: String,
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                debug!(path = %parts.uri.path(), "Auth failed: No Authorization header");
                AppError::Unauthorized
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            debug!(path = %parts.uri.path(), "Auth failed: Invalid Authorization format");
            AppError::Unauthorized
        })?;

        let claims = verify_token(token, &state.config().jwt.secret).map_err(|e| {
            debug!(path = %parts.uri.path(), error = ?e, "Auth failed: Token verification failed");
            e
        })?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
            debug!(path = %parts.uri.path(), sub = %claims.sub, "Auth failed: Invalid user ID in token");
            AppError::InvalidToken
        })?;

        debug!(
            path = %parts.uri.path(),
            user_id = %user_id,
            role = %claims.role,
            "User authenticated successfully"
        );

        Ok(AuthenticatedUser {
            id: user_id,
            username: claims.username,
            role: claims.role,
        })
    }
}
