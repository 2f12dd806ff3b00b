use serde::{Deserialize, Serialize};

use super::User;

/// Request to authenticate with email/password credentials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The account email address.
    pub email: String,

    /// The account password.
    pub password: String,
}

/// Request to create a new account. New accounts are always students;
/// faculty and admin accounts are provisioned out of band.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// The user's display name.
    pub name: String,

    /// The account email address.
    pub email: String,

    /// The account password.
    pub password: String,
}

/// Response to a successful login or registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Opaque bearer token for subsequent requests.
    pub token: String,

    /// The authenticated user.
    pub user: User,
}

/// Response to `GET /auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeResponse {
    /// The user the presented token belongs to.
    pub user: User,
}
