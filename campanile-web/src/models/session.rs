//! Session store: who is signed in, their token, and whether the persisted
//! session is still being resolved.
//!
//! Views read the store through the accessors; every mutation funnels
//! through the operations below so the token and profile never drift apart.

use crate::api::CampanileClient;
use crate::storage;
use reqwest::StatusCode;
use shared::models::{LoginRequest, RegisterRequest, Role, User};
use std::fmt;
use yewdux::prelude::*;

/// Authenticated-session state shared across the app.
#[derive(Clone, PartialEq, Store)]
pub struct SessionState {
    user: Option<User>,
    token: Option<String>,
    loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        // A fresh app start counts as loading until the persisted token has
        // been checked, so guards never see a half-resolved session.
        Self {
            user: None,
            token: None,
            loading: true,
        }
    }
}

impl SessionState {
    /// The signed-in user's profile, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The signed-in user's role, if any.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    /// Whether a profile and token are both present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// Whether the persisted session is still being resolved.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn resolve_anonymous(&mut self) {
        self.user = None;
        self.token = None;
        self.loading = false;
    }

    fn resolve_authenticated(&mut self, user: User, token: String) {
        self.user = Some(user);
        self.token = Some(token);
        self.loading = false;
    }
}

/// Errors surfaced to the sign-in and registration forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The backend rejected the credentials.
    InvalidCredentials,
    /// The email is already registered to another account.
    EmailTaken,
    /// Transport failure or an unexpected server response. Carries the
    /// backend's own message when its error envelope held one.
    Network(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCredentials => f.write_str("Invalid email or password"),
            Self::EmailTaken => f.write_str("That email is already registered"),
            Self::Network(message) => write!(f, "Unable to reach the server: {message}"),
        }
    }
}

impl std::error::Error for SessionError {}

fn classify_failure(status: Option<StatusCode>, message: Option<&str>) -> SessionError {
    match status {
        Some(StatusCode::UNAUTHORIZED) => SessionError::InvalidCredentials,
        Some(StatusCode::CONFLICT) => SessionError::EmailTaken,
        Some(status) => {
            SessionError::Network(message.map_or_else(|| status.to_string(), str::to_string))
        }
        None => SessionError::Network("connection failed".to_string()),
    }
}

impl SessionState {
    /// Resolve the persisted session, if any. A missing, expired, or
    /// rejected token resolves to the anonymous state; this never errors.
    pub async fn load_session(dispatch: &Dispatch<SessionState>) {
        let Some(token) = storage::load_token() else {
            dispatch.reduce_mut(SessionState::resolve_anonymous);
            return;
        };

        let client = CampanileClient::shared();
        client.set_auth_token(Some(token.clone()));
        match client.me().await {
            Ok(me) => {
                dispatch.reduce_mut(|state| state.resolve_authenticated(me.user, token));
            }
            Err(err) => {
                web_sys::console::error_1(&format!("Session validation failed: {err}").into());
                storage::clear_token();
                client.set_auth_token(None);
                dispatch.reduce_mut(SessionState::resolve_anonymous);
            }
        }
    }

    /// Exchange credentials for a session. On success the token is
    /// persisted and the store holds the signed-in profile; on failure the
    /// store is anonymous and the caller gets a displayable error.
    pub async fn login(
        dispatch: &Dispatch<SessionState>,
        request: &LoginRequest,
    ) -> Result<(), SessionError> {
        let client = CampanileClient::shared();
        match client.login(request).await {
            Ok(auth) => {
                storage::store_token(&auth.token);
                dispatch.reduce_mut(|state| state.resolve_authenticated(auth.user, auth.token));
                Ok(())
            }
            Err(err) => {
                dispatch.reduce_mut(SessionState::resolve_anonymous);
                Err(classify_failure(err.status(), err.message()))
            }
        }
    }

    /// Create a student account and sign it in, with the same contract as
    /// [`SessionState::login`].
    pub async fn register(
        dispatch: &Dispatch<SessionState>,
        request: &RegisterRequest,
    ) -> Result<(), SessionError> {
        let client = CampanileClient::shared();
        match client.register(request).await {
            Ok(auth) => {
                storage::store_token(&auth.token);
                dispatch.reduce_mut(|state| state.resolve_authenticated(auth.user, auth.token));
                Ok(())
            }
            Err(err) => {
                dispatch.reduce_mut(SessionState::resolve_anonymous);
                Err(classify_failure(err.status(), err.message()))
            }
        }
    }

    /// Drop the session. Purely local: the token leaves storage and the
    /// shared client, and the store goes anonymous. Never fails.
    pub fn logout(dispatch: &Dispatch<SessionState>) {
        storage::clear_token();
        CampanileClient::shared().set_auth_token(None);
        dispatch.reduce_mut(SessionState::resolve_anonymous);
    }
}
