//! Bearer-token identity extractor.

use std::sync::Arc;

use axum::Json;
use axum::extract::{FromRef, FromRequestParts, OptionalFromRequestParts};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use http::header::AUTHORIZATION;
use http::request::Parts;
use serde::Serialize;

use crate::token::validate_access_token;

/// HMAC secret shared with the OAuth2 provider. Exposed to extractors via `FromRef`.
#[derive(Clone)]
pub struct AccessTokenSecret(Arc<str>);

impl AccessTokenSecret {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self(secret.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 401 rejection rendered in the services' `{kind, message}` error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityRejection;

#[derive(Serialize)]
struct RejectionBody {
    kind: &'static str,
    message: &'static str,
}

impl IntoResponse for IdentityRejection {
    fn into_response(self) -> Response {
        let body = RejectionBody {
            kind: "UNAUTHORIZED",
            message: "unauthorized",
        };
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

/// Authenticated caller resolved from `Authorization: Bearer <token>`.
///
/// As a required extractor it rejects with 401 when the header is absent or invalid.
/// As `Option<Identity>` it yields `None` for anonymous requests but still rejects a
/// present-but-invalid token with 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i32,
}

/// Resolve identity from request headers. `Ok(None)` means no credentials were sent.
fn identity_from_parts(
    parts: &Parts,
    secret: &str,
) -> Result<Option<Identity>, IdentityRejection> {
    let Some(header) = parts.headers.get(AUTHORIZATION) else {
        return Ok(None);
    };
    let token = header
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(IdentityRejection)?;

    let info = validate_access_token(token, secret).map_err(|e| {
        tracing::debug!(error = %e, "rejected access token");
        IdentityRejection
    })?;
    Ok(Some(Identity {
        user_id: info.user_id,
    }))
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
    AccessTokenSecret: FromRef<S>,
{
    type Rejection = IdentityRejection;

    // Resolve synchronously and hand back a 'static future so the borrow of `parts`
    // does not leak into the returned future.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let secret = AccessTokenSecret::from_ref(state);
        let result = identity_from_parts(parts, secret.as_str())
            .and_then(|identity| identity.ok_or(IdentityRejection));
        async move { result }
    }
}

impl<S> OptionalFromRequestParts<S> for Identity
where
    S: Send + Sync,
    AccessTokenSecret: FromRef<S>,
{
    type Rejection = IdentityRejection;

    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Option<Self>, Self::Rejection>> + Send {
        let secret = AccessTokenSecret::from_ref(state);
        let result = identity_from_parts(parts, secret.as_str());
        async move { result }
    }
}
