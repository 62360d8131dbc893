use std::convert::Infallible;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request, State},
    http::{header, HeaderMap, StatusCode},
    Form, Json,
};
use serde_json::json;
use tracing::{debug, info};

use crate::{
    error::{AppError, AppResult},
    models::{LoginAttempt, LoginRequest},
    AppState,
};

/// Decodes the login body as JSON when the media type is `application/json`
/// (compared case-insensitively, parameters ignored), and as a URL-encoded
/// form otherwise. A body that fails to decode carries no fields, which the
/// handler rejects as a bad request.
#[async_trait]
impl<S> FromRequest<S> for LoginRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let decoded = if is_json(req.headers()) {
            Bytes::from_request(req, state)
                .await
                .map_err(|rejection| rejection.body_text())
                .and_then(|body| {
                    serde_json::from_slice::<serde_json::Value>(&body)
                        .map_err(|err| err.to_string())
                })
                .map(LoginRequest::from_json)
        } else {
            Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map(|Form(pairs)| LoginRequest::from_pairs(pairs))
                .map_err(|rejection| rejection.body_text())
        };

        Ok(decoded.unwrap_or_else(|reason| {
            debug!(%reason, "Could not decode login body");
            LoginRequest::default()
        }))
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|media_type| media_type.trim().eq_ignore_ascii_case("application/json"))
}

// ── POST /login ───────────────────────────────────────────────────────────────

pub async fn login(
    State(state): State<AppState>,
    payload: LoginRequest,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let email = match payload.attempt() {
        LoginAttempt::Incomplete => {
            return Err(AppError::BadRequest("Failed login, empty fields".to_string()));
        }
        LoginAttempt::Credentials { email, password }
            if state.catalog.login(email, password).is_some() =>
        {
            email
        }
        LoginAttempt::Credentials { email, .. } => {
            debug!(email, "Rejected login");
            return Err(invalid_credentials());
        }
        LoginAttempt::Unmatchable => {
            debug!("Rejected login with non-string credentials");
            return Err(invalid_credentials());
        }
    };

    info!(email, "Successful login");

    Ok((StatusCode::OK, Json(json!({ "message": "Successful login" }))))
}

fn invalid_credentials() -> AppError {
    AppError::Unauthorized("Invalid username or password".to_string())
}
