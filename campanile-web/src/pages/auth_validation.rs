//! Validation for the sign-in and registration forms.
//!
//! Checks run client-side before any request is issued; failures surface
//! inline next to the offending field and never reach the session store.

/// Validation errors that can occur during form validation.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ValidationError {
    /// Field is required but empty.
    Required,
    /// Display name is too short (less than 2 characters).
    NameTooShort,
    /// Email address is malformed.
    InvalidEmail,
    /// Password is too short (less than 8 characters).
    PasswordTooShort,
    /// Password confirmation does not match the password.
    PasswordsDoNotMatch,
}

impl ValidationError {
    /// Inline message rendered next to the offending field.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Required => "This field is required",
            Self::NameTooShort => "Name must be at least 2 characters",
            Self::InvalidEmail => "Enter a valid email address",
            Self::PasswordTooShort => "Password must be at least 8 characters",
            Self::PasswordsDoNotMatch => "Passwords do not match",
        }
    }
}

/// Validate a display name: required, minimum 2 characters.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }
    if trimmed.chars().count() < 2 {
        return Err(ValidationError::NameTooShort);
    }
    Ok(())
}

/// Validate an email address: required, with text either side of an `@`.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::Required);
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidEmail),
    }
}

/// Validate a password: required, minimum 8 characters.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Required);
    }
    if password.chars().count() < 8 {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Validate the password confirmation: required, must match the password.
pub fn validate_confirm_password(
    confirm_password: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if confirm_password.is_empty() {
        return Err(ValidationError::Required);
    }
    if confirm_password != password {
        return Err(ValidationError::PasswordsDoNotMatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Maya Lin").is_ok());
        assert!(validate_name("Al").is_ok());
        assert_eq!(validate_name(""), Err(ValidationError::Required));
        assert_eq!(validate_name("   "), Err(ValidationError::Required));
        assert_eq!(validate_name("M"), Err(ValidationError::NameTooShort));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("maya@campus.edu").is_ok());
        assert_eq!(validate_email(""), Err(ValidationError::Required));
        assert_eq!(
            validate_email("not-an-email"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(validate_email("@campus.edu"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("maya@"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("long enough").is_ok());
        assert_eq!(validate_password(""), Err(ValidationError::Required));
        assert_eq!(
            validate_password("short"),
            Err(ValidationError::PasswordTooShort)
        );
        // Exactly at the boundary.
        assert!(validate_password("12345678").is_ok());
    }

    #[test]
    fn test_validate_confirm_password() {
        assert!(validate_confirm_password("secret-123", "secret-123").is_ok());
        assert_eq!(
            validate_confirm_password("", "secret-123"),
            Err(ValidationError::Required)
        );
        assert_eq!(
            validate_confirm_password("secret-124", "secret-123"),
            Err(ValidationError::PasswordsDoNotMatch)
        );
    }

    #[test]
    fn test_messages_are_static_and_nonempty() {
        let errors = [
            ValidationError::Required,
            ValidationError::NameTooShort,
            ValidationError::InvalidEmail,
            ValidationError::PasswordTooShort,
            ValidationError::PasswordsDoNotMatch,
        ];
        for error in errors {
            assert!(!error.message().is_empty());
        }
    }
}
