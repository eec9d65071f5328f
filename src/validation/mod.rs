//! Input validation for entity data.
//!
//! Centralizes the predicates entity creation must satisfy before anything
//! is persisted, notified, or published.

use crate::model::User;

/// Result type for validation.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors from validation failures.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("user name cannot be empty")]
    EmptyName,

    #[error("email address cannot be empty")]
    EmptyEmail,

    #[error("email address must contain '@': {email}")]
    MalformedEmail { email: String },
}

/// Validate a candidate user.
///
/// Rules:
/// - Name must not be empty
/// - Email must not be empty
/// - Email must contain an `'@'`
pub fn validate_user(user: &User) -> Result<()> {
    if user.name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if user.email.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    if !user.email.contains('@') {
        return Err(ValidationError::MalformedEmail {
            email: user.email.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    mod name_rules {
        use super::*;

        #[test]
        fn test_valid_name_passes() {
            let user = User::new("1", "Alice", "alice@example.com");
            assert!(validate_user(&user).is_ok());
        }

        #[test]
        fn test_empty_name_rejected() {
            let user = User::new("1", "", "alice@example.com");
            assert_eq!(validate_user(&user), Err(ValidationError::EmptyName));
        }
    }

    mod email_rules {
        use super::*;

        #[test]
        fn test_empty_email_rejected() {
            let user = User::new("1", "Alice", "");
            assert_eq!(validate_user(&user), Err(ValidationError::EmptyEmail));
        }

        #[test]
        fn test_email_without_at_rejected() {
            let user = User::new("1", "Bob", "bad-email");
            assert_eq!(
                validate_user(&user),
                Err(ValidationError::MalformedEmail {
                    email: "bad-email".to_string()
                })
            );
        }

        #[test]
        fn test_minimal_email_passes() {
            let user = User::new("1", "Bob", "a@b");
            assert!(validate_user(&user).is_ok());
        }
    }
}
