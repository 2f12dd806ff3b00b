//! HTTP client for the campus backend.
//!
//! All requests go through [`CampanileClient`]. The client carries the
//! bearer token for the signed-in user; one instance is shared across the
//! app so a token installed at login is visible to every later request.
//! Failure responses are parsed into [`ApiError`] so callers see the
//! backend's error envelope instead of a bare status.

use crate::config::FrontendConfig;
use crate::storage;
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use shared::models::{
    AuthResponse, ErrorResponse, LoginRequest, MeResponse, NotificationFilter, NotificationPage,
    RegisterRequest,
};
use std::fmt;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

thread_local! {
    static SHARED_CLIENT: OnceCell<CampanileClient> = OnceCell::new();
}

/// Failure raised by [`CampanileClient`] requests.
#[derive(Debug)]
pub enum ApiError {
    /// The backend answered with a failure status, along with its error
    /// envelope when the body carried one.
    Status(StatusCode, Option<ErrorResponse>),
    /// The request never produced a usable response.
    Transport(reqwest::Error),
}

impl ApiError {
    /// Status code of the failure, when the backend answered at all.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status(status, _) => Some(*status),
            Self::Transport(err) => err.status(),
        }
    }

    /// Backend-authored message from the error envelope, if one was sent.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Status(_, Some(envelope)) => Some(envelope.message.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(status, Some(envelope)) => write!(f, "{status}: {envelope}"),
            Self::Status(status, None) => write!(f, "{status}"),
            Self::Transport(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}

/// Pass a success response through; turn anything else into an
/// [`ApiError`], reading the backend's envelope out of the body.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let envelope = response.json::<ErrorResponse>().await.ok();
    Err(ApiError::Status(status, envelope))
}

/// Query parameters for the notification listing, under the backend's
/// wire names.
fn notification_query(
    user_id: &Uuid,
    page: u32,
    limit: u32,
    filter: &NotificationFilter,
) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("userId", user_id.to_string()),
        ("page", page.to_string()),
        ("limit", limit.to_string()),
    ];
    if let Some(audience) = filter.audience {
        query.push(("targetAudience", audience.as_str().to_string()));
    }
    if let Some(kind) = filter.kind {
        query.push(("type", kind.as_str().to_string()));
    }
    if let Some(priority) = filter.priority {
        query.push(("priority", priority.as_str().to_string()));
    }
    query
}

/// Client for the campus REST API.
#[derive(Clone, Debug)]
pub struct CampanileClient {
    base_url: String,
    client: Client,
    auth_token: Arc<Mutex<Option<String>>>,
}

impl CampanileClient {
    /// Create a new client against the given base URL. No token is
    /// installed; [`CampanileClient::shared`] handles that.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            auth_token: Arc::new(Mutex::new(None)),
        }
    }

    /// App-wide client instance. The first call loads the persisted token
    /// from local storage so requests after a reload stay authenticated.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| {
                let client = Self::new(FrontendConfig::new().api_base_url());
                client.set_auth_token(storage::load_token());
                client
            })
            .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Install or clear the bearer token used for authenticated requests.
    pub fn set_auth_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.auth_token.lock() {
            *guard = token;
        }
    }

    fn auth_token(&self) -> Option<String> {
        self.auth_token.lock().ok().and_then(|guard| guard.clone())
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match self.auth_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Exchange credentials for a token and profile. Installs the token on
    /// success.
    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let url = self.api_url("auth/login");
        let response = check_status(self.client.post(url).json(payload).send().await?).await?;
        let body: AuthResponse = response.json().await?;
        self.set_auth_token(Some(body.token.clone()));
        Ok(body)
    }

    /// Create a student account and sign it in. Installs the token on
    /// success.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let url = self.api_url("auth/register");
        let response = check_status(self.client.post(url).json(payload).send().await?).await?;
        let body: AuthResponse = response.json().await?;
        self.set_auth_token(Some(body.token.clone()));
        Ok(body)
    }

    /// Fetch the profile the installed token belongs to.
    pub async fn me(&self) -> Result<MeResponse, ApiError> {
        let url = self.api_url("auth/me");
        let response = check_status(self.apply_auth(self.client.get(url)).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Fetch one page of persistent notifications for the user.
    pub async fn list_notifications(
        &self,
        user_id: &Uuid,
        page: u32,
        limit: u32,
        filter: &NotificationFilter,
    ) -> Result<NotificationPage, ApiError> {
        let url = self.api_url("notifications");
        let request = self
            .apply_auth(self.client.get(url))
            .query(&notification_query(user_id, page, limit, filter));
        let response = check_status(request.send().await?).await?;
        Ok(response.json().await?)
    }

    /// Flag one notification as read for the signed-in user.
    pub async fn mark_notification_read(&self, id: &Uuid) -> Result<(), ApiError> {
        let url = self.api_url(&format!("notifications/{id}/read"));
        check_status(self.apply_auth(self.client.post(url)).send().await?).await?;
        Ok(())
    }

    /// Flag every notification for the user as read.
    pub async fn mark_all_notifications_read(&self, user_id: &Uuid) -> Result<(), ApiError> {
        let url = self.api_url("notifications/read-all");
        let request = self
            .apply_auth(self.client.post(url))
            .query(&[("userId", user_id.to_string())]);
        check_status(request.send().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Audience, NotificationKind, Priority};

    #[test]
    fn api_url_joins_without_double_slashes() {
        let client = CampanileClient::new("/api/");
        assert_eq!(client.api_url("auth/login"), "/api/auth/login");
        assert_eq!(client.api_url("/auth/login"), "/api/auth/login");
    }

    #[test]
    fn auth_token_starts_empty_and_can_be_replaced() {
        let client = CampanileClient::new("/api");
        assert_eq!(client.auth_token(), None);
        client.set_auth_token(Some("tok-1".to_string()));
        assert_eq!(client.auth_token(), Some("tok-1".to_string()));
        client.set_auth_token(None);
        assert_eq!(client.auth_token(), None);
    }

    #[test]
    fn bearer_header_is_applied_when_a_token_is_installed() {
        let client = CampanileClient::new("http://localhost:8080/api");
        client.set_auth_token(Some("tok-2".to_string()));
        let request = client
            .apply_auth(client.client.get("http://localhost:8080/api/auth/me"))
            .build()
            .unwrap();
        let header = request
            .headers()
            .get(reqwest::header::AUTHORIZATION)
            .unwrap();
        assert_eq!(header, "Bearer tok-2");
    }

    #[test]
    fn requests_without_a_token_carry_no_auth_header() {
        let client = CampanileClient::new("http://localhost:8080/api");
        let request = client
            .apply_auth(client.client.get("http://localhost:8080/api/notifications"))
            .build()
            .unwrap();
        assert!(request.headers().get(reqwest::header::AUTHORIZATION).is_none());
    }

    #[test]
    fn api_errors_carry_status_and_backend_message() {
        let err = ApiError::Status(
            StatusCode::SERVICE_UNAVAILABLE,
            Some(ErrorResponse::new("Maintenance window")),
        );
        assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
        assert_eq!(err.message(), Some("Maintenance window"));
        assert_eq!(
            err.to_string(),
            "503 Service Unavailable: Maintenance window"
        );
    }

    #[test]
    fn api_errors_without_an_envelope_fall_back_to_the_status() {
        let err = ApiError::Status(StatusCode::NOT_FOUND, None);
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(err.message(), None);
        assert_eq!(err.to_string(), "404 Not Found");
    }

    #[test]
    fn notification_queries_use_the_backend_parameter_names() {
        let user_id = Uuid::new_v4();
        let filter = NotificationFilter {
            kind: Some(NotificationKind::Warning),
            priority: Some(Priority::High),
            audience: Some(Audience::Students),
        };

        let query = notification_query(&user_id, 3, 10, &filter);

        assert_eq!(
            query,
            vec![
                ("userId", user_id.to_string()),
                ("page", "3".to_string()),
                ("limit", "10".to_string()),
                ("targetAudience", "students".to_string()),
                ("type", "warning".to_string()),
                ("priority", "high".to_string()),
            ]
        );
    }

    #[test]
    fn an_empty_filter_adds_no_filter_parameters() {
        let query = notification_query(&Uuid::new_v4(), 1, 10, &NotificationFilter::default());
        let names: Vec<&str> = query.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["userId", "page", "limit"]);
    }
}
