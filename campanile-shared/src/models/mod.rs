pub mod auth;
pub mod errors;
pub mod notification;
pub mod timestamp;
pub mod user;

pub use auth::{AuthResponse, LoginRequest, MeResponse, RegisterRequest};
pub use errors::ErrorResponse;
pub use notification::{
    Audience, Notification, NotificationFilter, NotificationKind, NotificationPage, Priority,
    SortKey, sort_notifications,
};
pub use timestamp::Timestamp;
pub use user::{Role, User};
