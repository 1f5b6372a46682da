//! REST client for the Nyaay Sathi backend.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::api_url;
use crate::models::{
    AuthResponse, CaseUpdate, ChatResponse, FirmClient, FirmClientApplicationRequest,
    FirmClientLoginRequest, GuestBookingRequest, GuestBookingResponse, GuestChatRequest,
    LoginRequest, PlatformFirm, PlatformLawyer, RegisterPaidRequest, RegisterPaidResponse,
    RegisterRequest, WaitlistRequest,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("{0}")]
    AlreadyExists(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("Not found")]
    NotFound,
    #[error("{}", server_message(.status, .detail))]
    Server { status: u16, detail: Option<String> },
}

fn server_message(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(d) => d.clone(),
        None => format!("Request failed with status {}", status),
    }
}

impl ApiError {
    /// Message the server sent back, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::AlreadyExists(d) | ApiError::Unauthorized(d) => Some(d),
            ApiError::Server { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, ApiError::AlreadyExists(_))
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// FastAPI sends `detail` as a string, or as a list of validation objects.
fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Array(items) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(|m| m.as_str()).map(str::to_string)),
        _ => None,
    }
}

fn is_duplicate_detail(detail: &str) -> bool {
    let lower = detail.to_lowercase();
    lower.contains("already exists") || lower.contains("already registered")
}

/// Maps a non-2xx status and body onto an `ApiError`.
pub fn classify_error(status: u16, body: &str) -> ApiError {
    let detail = extract_detail(body);
    match status {
        400 => match detail {
            Some(d) if is_duplicate_detail(&d) => ApiError::AlreadyExists(d),
            detail => ApiError::Server { status, detail },
        },
        401 => ApiError::Unauthorized(detail.unwrap_or_else(|| "Invalid credentials".to_string())),
        404 => ApiError::NotFound,
        _ => ApiError::Server { status, detail },
    }
}

async fn read_response<R: DeserializeOwned>(resp: Response) -> Result<R, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        log::warn!("request failed with status {}", status);
        return Err(classify_error(status, &body));
    }
    resp.json::<R>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

pub async fn get<R: DeserializeOwned>(path: &str) -> Result<R, ApiError> {
    let resp = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(resp).await
}

pub async fn post<T, R>(path: &str, body: &T) -> Result<R, ApiError>
where
    T: Serialize,
    R: DeserializeOwned,
{
    let resp = Request::post(&api_url(path))
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(resp).await
}

pub async fn register(body: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    post("/auth/register", body).await
}

pub async fn login(body: &LoginRequest) -> Result<AuthResponse, ApiError> {
    post("/auth/login", body).await
}

pub async fn firm_client_login(body: &FirmClientLoginRequest) -> Result<AuthResponse, ApiError> {
    post("/firm-clients/login", body).await
}

/// Any 400 from the waitlist means the email is already on it.
pub async fn join_waitlist(body: &WaitlistRequest) -> Result<serde_json::Value, ApiError> {
    match post("/waitlist", body).await {
        Err(ApiError::Server { status: 400, detail }) => Err(ApiError::AlreadyExists(
            detail.unwrap_or_else(|| "Already on the waitlist".to_string()),
        )),
        other => other,
    }
}

pub async fn fetch_lawyers() -> Result<Vec<PlatformLawyer>, ApiError> {
    get("/lawyers").await
}

pub async fn fetch_law_firms() -> Result<Vec<PlatformFirm>, ApiError> {
    get("/lawfirms/all").await
}

pub async fn submit_firm_client_application(
    body: &FirmClientApplicationRequest,
) -> Result<serde_json::Value, ApiError> {
    post("/firm-clients/applications", body).await
}

pub async fn fetch_firm_client(id: &str) -> Result<FirmClient, ApiError> {
    get(&format!("/firm-clients/{}", id)).await
}

pub async fn fetch_case_updates(client_id: &str) -> Result<Vec<CaseUpdate>, ApiError> {
    get(&format!("/firm-clients/{}/case-updates", client_id)).await
}

pub async fn register_paid_firm_client(body: &RegisterPaidRequest) -> Result<RegisterPaidResponse, ApiError> {
    post("/firm-clients/register-paid", body).await
}

pub async fn guest_chat(body: &GuestChatRequest) -> Result<ChatResponse, ApiError> {
    post("/chat/guest", body).await
}

pub async fn create_guest_booking(body: &GuestBookingRequest) -> Result<GuestBookingResponse, ApiError> {
    post("/bookings/guest", body).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_registration_is_recognised() {
        let err = classify_error(400, r#"{"detail":"User with this email already exists"}"#);
        assert!(err.is_already_exists());
        assert_eq!(err.to_string(), "User with this email already exists");

        let err = classify_error(400, r#"{"detail":"Email already registered"}"#);
        assert!(err.is_already_exists());
    }

    #[test]
    fn other_already_messages_are_not_duplicates() {
        let err = classify_error(
            400,
            r#"{"detail":"You already have a pending application for this law firm"}"#,
        );
        assert!(!err.is_already_exists());
        assert_eq!(err.detail(), Some("You already have a pending application for this law firm"));
    }

    #[test]
    fn other_bad_requests_keep_server_detail() {
        let err = classify_error(400, r#"{"detail":"Invalid law firm"}"#);
        assert_eq!(err, ApiError::Server { status: 400, detail: Some("Invalid law firm".into()) });
        assert_eq!(err.detail(), Some("Invalid law firm"));
    }

    #[test]
    fn unauthorized_and_not_found() {
        assert_eq!(
            classify_error(401, r#"{"detail":"Incorrect email or password"}"#),
            ApiError::Unauthorized("Incorrect email or password".into())
        );
        assert_eq!(classify_error(401, ""), ApiError::Unauthorized("Invalid credentials".into()));
        assert_eq!(classify_error(404, r#"{"detail":"Client not found"}"#), ApiError::NotFound);
    }

    #[test]
    fn unparseable_body_has_no_detail() {
        let err = classify_error(502, "<html>Bad Gateway</html>");
        assert_eq!(err, ApiError::Server { status: 502, detail: None });
        assert_eq!(err.detail(), None);
        assert_eq!(err.to_string(), "Request failed with status 502");
    }

    #[test]
    fn validation_lists_surface_first_message() {
        let body = r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address","type":"value_error"}]}"#;
        assert_eq!(
            classify_error(422, body).detail(),
            Some("value is not a valid email address")
        );
    }
}
