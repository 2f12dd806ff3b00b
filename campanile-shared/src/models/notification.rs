use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

use super::{Role, Timestamp};

/// Severity class shared by ephemeral toasts and persistent notifications.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// Canonical wire string; also the lexicographic sort key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "info" => Ok(Self::Info),
            "success" => Ok(Self::Success),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err("unknown notification kind"),
        }
    }
}

/// Urgency ladder. `Ord` follows declaration order, so a descending sort
/// puts urgent first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// Return the canonical string representation used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err("unknown priority"),
        }
    }
}

/// Which roles a persistent notification targets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    All,
    Students,
    Faculty,
    Admins,
}

impl Audience {
    /// Return the canonical string representation used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Students => "students",
            Self::Faculty => "faculty",
            Self::Admins => "admins",
        }
    }

    /// Whether the audience covers the given role.
    #[must_use]
    pub fn includes(self, role: Role) -> bool {
        match self {
            Self::All => true,
            Self::Students => role == Role::Student,
            Self::Faculty => role == Role::Faculty,
            Self::Admins => role == Role::Admin,
        }
    }
}

/// A persistent notification delivered by the backend.
///
/// `read_at` is paired with the read flag: it is `Some` exactly when the
/// notification has been read. [`Notification::mark_read`] and
/// [`Notification::mark_unread`] are the only mutation points for that pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    /// Unique identifier for the notification.
    pub id: Uuid,

    /// Short headline shown in list rows.
    pub title: String,

    /// Full body text.
    pub message: String,

    /// Severity class.
    pub kind: NotificationKind,

    /// Urgency assigned by the sender.
    pub priority: Priority,

    /// Which roles the notification targets.
    pub audience: Audience,

    is_read: bool,

    read_at: Option<Timestamp>,

    /// When the notification was created.
    pub created_at: Timestamp,

    /// Display name of the sender.
    pub created_by: String,
}

impl Notification {
    /// Build a fresh unread notification.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
        priority: Priority,
        audience: Audience,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            message: message.into(),
            kind,
            priority,
            audience,
            is_read: false,
            read_at: None,
            created_at: Timestamp::now(),
            created_by: created_by.into(),
        }
    }

    /// Whether the notification has been read.
    #[must_use]
    pub const fn is_read(&self) -> bool {
        self.is_read
    }

    /// When the notification was read, if it has been.
    #[must_use]
    pub const fn read_at(&self) -> Option<&Timestamp> {
        self.read_at.as_ref()
    }

    /// Flag the notification as read at the given instant.
    pub fn mark_read(&mut self, at: Timestamp) {
        self.is_read = true;
        self.read_at = Some(at);
    }

    /// Return the notification to the unread state.
    pub fn mark_unread(&mut self) {
        self.is_read = false;
        self.read_at = None;
    }
}

/// One page of the persistent-notification listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationPage {
    /// Records for the requested page.
    pub items: Vec<Notification>,

    /// 1-based page number this response covers.
    pub page: u32,

    /// Total number of pages for the query.
    pub total_pages: u32,
}

/// Optional server-side filters for the listing endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotificationFilter {
    pub kind: Option<NotificationKind>,
    pub priority: Option<Priority>,
    pub audience: Option<Audience>,
}

/// Orderings the notification center can apply to a loaded page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Newest first by `created_at`.
    #[default]
    Date,
    /// Urgent first, stable on ties.
    Priority,
    /// Lexicographic by kind name, stable on ties.
    Kind,
}

impl SortKey {
    /// Stable identifier used as the `<select>` option value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Priority => "priority",
            Self::Kind => "kind",
        }
    }
}

impl FromStr for SortKey {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "date" => Ok(Self::Date),
            "priority" => Ok(Self::Priority),
            "kind" => Ok(Self::Kind),
            _ => Err("unknown sort key"),
        }
    }
}

/// Re-order a loaded page in place. The sort is stable and purely local;
/// it never triggers a refetch.
pub fn sort_notifications(items: &mut [Notification], key: SortKey) {
    match key {
        SortKey::Date => items.sort_by(|a, b| b.created_at.0.cmp(&a.created_at.0)),
        SortKey::Priority => items.sort_by(|a, b| b.priority.cmp(&a.priority)),
        SortKey::Kind => items.sort_by(|a, b| a.kind.as_str().cmp(b.kind.as_str())),
    }
}
