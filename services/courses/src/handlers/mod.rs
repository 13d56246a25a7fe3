pub mod category;
pub mod comment;
pub mod course;
pub mod health;
pub mod lesson;
pub mod oauth;
pub mod user;

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use ecourse_auth_types::identity::Identity;
use serde_json::Value;

use crate::error::CoursesServiceError;

/// JSON request body. Malformed or non-JSON bodies reject with `MissingData`.
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = CoursesServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "rejected request body");
                CoursesServiceError::MissingData
            })?;
        Ok(Self(value))
    }
}

/// User id of the caller, `None` when the request is anonymous.
pub(crate) fn caller(identity: Option<Identity>) -> Option<i32> {
    identity.map(|i| i.user_id)
}

/// Integer body field given either as a JSON number or a numeric string.
///
/// `None` when the field is absent or does not hold an integer.
pub(crate) fn int_field(body: &Value, key: &str) -> Option<i64> {
    match body.get(key)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Text body field. Numbers are taken in their decimal form.
///
/// `Ok(None)` when absent or null; `MissingData` for booleans, arrays and objects.
pub(crate) fn string_field(
    body: &Value,
    key: &str,
) -> Result<Option<String>, CoursesServiceError> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(_) => Err(CoursesServiceError::MissingData),
    }
}

/// List of strings. `None` when absent, not an array, or holding a non-string.
pub(crate) fn string_list_field(body: &Value, key: &str) -> Option<Vec<String>> {
    body.get(key)?
        .as_array()?
        .iter()
        .map(|v| v.as_str().map(str::to_owned))
        .collect()
}
