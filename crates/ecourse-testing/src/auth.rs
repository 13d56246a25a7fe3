//! Mock auth helpers for integration tests.
//!
//! Production tokens come from the OAuth2 provider. In tests, `MockAuth` signs a
//! short-lived token with [`TEST_ACCESS_TOKEN_SECRET`] so no provider is needed.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::http::{HeaderName, HeaderValue, header::AUTHORIZATION};

use ecourse_auth_types::token::issue_access_token;

/// Secret the service under test must be configured with.
pub const TEST_ACCESS_TOKEN_SECRET: &str = "test-access-token-secret-for-tests-only";

/// Identity to present on test requests.
pub struct MockAuth {
    pub user_id: i32,
}

impl MockAuth {
    pub fn new(user_id: i32) -> Self {
        Self { user_id }
    }

    /// Signed access token valid for one hour.
    pub fn token(&self) -> String {
        let exp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default()
            + 3600;
        issue_access_token(self.user_id, exp, TEST_ACCESS_TOKEN_SECRET)
            .expect("sign test access token")
    }

    /// `Authorization` header pair for a single request.
    pub fn header(&self) -> (HeaderName, HeaderValue) {
        let value = HeaderValue::from_str(&format!("Bearer {}", self.token()))
            .expect("bearer token is a valid header value");
        (AUTHORIZATION, value)
    }
}
