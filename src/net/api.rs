//! REST API helpers for communicating with the helpdesk backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Auth calls return user-facing message strings, built from the server's
//! `msg` field where available. Ticket calls return `ApiError` so callers
//! can tell a rejected credential apart from other failures. Response
//! interpretation is kept in plain helpers below so it is testable without
//! a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::tickets::{NewTicketDraft, Ticket};

/// Base path of the REST backend.
pub const API_URL: &str = "/api";

/// Message shown when a request never reaches the backend.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Is the backend running?";

/// Fallback when an auth failure carries no usable `msg` field.
pub const AUTH_FAILED_MESSAGE: &str = "Authentication failed";

/// Header telling an ngrok tunnel to skip its interstitial page, sent on
/// every request.
#[cfg(feature = "hydrate")]
const NGROK_SKIP_HEADER: (&str, &str) = ("ngrok-skip-browser-warning", "true");

/// Errors surfaced by ticket API calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server rejected the bearer token (401 or 422).
    #[error("session expired")]
    SessionExpired,
    /// Any other non-2xx response.
    #[error("request failed with status {0}")]
    Http(u16),
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// Browser-only call invoked outside the hydrate build.
    #[error("not available on server")]
    Unavailable,
}

/// Extract the access token from a login response body.
pub fn extract_access_token(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("access_token")?
        .as_str()
        .map(ToOwned::to_owned)
}

/// User-facing message for a failed auth request: the server's `msg` field
/// when present, otherwise the generic fallback.
pub fn auth_failure_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("msg").and_then(|m| m.as_str()).map(ToOwned::to_owned))
        .unwrap_or_else(|| AUTH_FAILED_MESSAGE.to_owned())
}

/// Map a non-2xx ticket-endpoint status to the error taxonomy. 401 and 422
/// both mean the credential was rejected.
pub fn status_error(status: u16) -> ApiError {
    match status {
        401 | 422 => ApiError::SessionExpired,
        other => ApiError::Http(other),
    }
}

/// `Authorization` header value, re-read from localStorage per request so
/// the token sent is never staler than the persisted one.
#[cfg(feature = "hydrate")]
fn bearer() -> String {
    format!(
        "Bearer {}",
        crate::util::token_store::read().unwrap_or_default()
    )
}

#[cfg(feature = "hydrate")]
async fn post_credentials(
    path: &str,
    username: &str,
    password: &str,
) -> Result<gloo_net::http::Response, String> {
    let request = gloo_net::http::Request::post(&format!("{API_URL}{path}"))
        .header(NGROK_SKIP_HEADER.0, NGROK_SKIP_HEADER.1)
        .json(&serde_json::json!({ "username": username, "password": password }))
        .map_err(|e| e.to_string())?;
    request
        .send()
        .await
        .map_err(|_| NETWORK_ERROR_MESSAGE.to_owned())
}

/// POST `/api/login` with the given credentials.
///
/// # Errors
///
/// Returns a user-facing message: the server's `msg` field, the generic
/// auth fallback, or the network-error copy.
pub async fn login(username: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_credentials("/login", username, password).await?;
        let body = resp.text().await.unwrap_or_default();
        if !resp.ok() {
            return Err(auth_failure_message(&body));
        }
        extract_access_token(&body).ok_or_else(|| AUTH_FAILED_MESSAGE.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// POST `/api/register`. Success carries no body the client uses.
///
/// # Errors
///
/// Same message taxonomy as [`login`].
pub async fn register(username: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_credentials("/register", username, password).await?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(auth_failure_message(&body));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// GET `/api/tickets` — the full snapshot, in server order.
///
/// # Errors
///
/// `SessionExpired` on 401/422, `Http` on other non-2xx, `Network` when no
/// response arrived or the body failed to parse.
pub async fn fetch_tickets() -> Result<Vec<Ticket>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&format!("{API_URL}/tickets"))
            .header("Authorization", &bearer())
            .header(NGROK_SKIP_HEADER.0, NGROK_SKIP_HEADER.1)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp.status()));
        }
        resp.json::<Vec<Ticket>>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// POST `/api/tickets` with the draft as the body.
///
/// # Errors
///
/// See [`fetch_tickets`].
pub async fn create_ticket(draft: &NewTicketDraft) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(&format!("{API_URL}/tickets"))
            .header("Authorization", &bearer())
            .header(NGROK_SKIP_HEADER.0, NGROK_SKIP_HEADER.1)
            .json(draft)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err(ApiError::Unavailable)
    }
}

/// PUT `/api/tickets/{id}` marking the ticket closed.
///
/// # Errors
///
/// See [`fetch_tickets`].
pub async fn close_ticket(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::put(&format!("{API_URL}/tickets/{id}"))
            .header("Authorization", &bearer())
            .header(NGROK_SKIP_HEADER.0, NGROK_SKIP_HEADER.1)
            .json(&serde_json::json!({ "status": "Closed" }))
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// DELETE `/api/tickets/{id}`, no body.
///
/// # Errors
///
/// See [`fetch_tickets`].
pub async fn delete_ticket(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&format!("{API_URL}/tickets/{id}"))
            .header("Authorization", &bearer())
            .header(NGROK_SKIP_HEADER.0, NGROK_SKIP_HEADER.1)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}
