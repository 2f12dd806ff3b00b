use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Campus role attached to every account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Faculty,
    Admin,
}

impl Role {
    /// Return the canonical string representation used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Faculty => "faculty",
            Self::Admin => "admin",
        }
    }

    /// Human-readable label for profile and dropdown views.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Faculty => "Faculty",
            Self::Admin => "Administrator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "student" => Ok(Self::Student),
            "faculty" => Ok(Self::Faculty),
            "admin" => Ok(Self::Admin),
            _ => Err("unknown role"),
        }
    }
}

/// Represents a user account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: uuid::Uuid,

    /// The user's display name.
    pub name: String,

    /// The user's email address.
    pub email: String,

    /// The user's campus role.
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;
    use uuid::Uuid;

    fn sample_user(role: Role) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Avery Quinn".to_string(),
            email: "avery@campus.edu".to_string(),
            role,
        }
    }

    #[test]
    fn test_user_creation() {
        let user = sample_user(Role::Student);

        assert!(!user.id.is_nil(), "User ID should not be nil");
        assert_eq!(user.name, "Avery Quinn");
        assert_eq!(user.email, "avery@campus.edu");
        assert_eq!(user.role, Role::Student);
    }

    #[test]
    fn test_user_serialization() {
        let id = Uuid::parse_str("f47ac10b-58cc-4372-a567-0e02b2c3d479").unwrap();
        let user = User {
            id,
            name: "Avery Quinn".to_string(),
            email: "avery@campus.edu".to_string(),
            role: Role::Faculty,
        };

        let serialized = serde_json::to_string(&user).unwrap();
        let deserialized: User = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, user);
        assert_eq!(deserialized.id, id);
        assert!(serialized.contains("\"role\":\"faculty\""));
    }

    #[test]
    fn role_roundtrip() {
        for (text, role) in [
            ("student", Role::Student),
            ("faculty", Role::Faculty),
            ("admin", Role::Admin),
        ] {
            assert_eq!(role.as_str(), text);
            assert_eq!(role.to_string(), text);
            assert_eq!(Role::from_str(text).unwrap(), role);
        }
    }

    #[test]
    fn role_invalid() {
        assert!(Role::from_str("staff").is_err());
        assert!(Role::from_str("Admin").is_err());
        assert!(Role::from_str("").is_err());
    }

    #[test]
    fn role_rejects_unknown_on_the_wire() {
        assert!(serde_json::from_str::<Role>("\"registrar\"").is_err());
        let parsed: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(parsed, Role::Admin);
    }

    #[test]
    fn role_labels() {
        assert_eq!(Role::Student.label(), "Student");
        assert_eq!(Role::Admin.label(), "Administrator");
    }
}
