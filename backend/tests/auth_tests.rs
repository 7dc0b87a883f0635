//! Account and role tests
//!
//! Property-based and unit tests for:
//! - Credential validation (email, password)
//! - Role parsing and the admin guard
//! - The public user shape never exposing a password hash

use chrono::Utc;
use proptest::prelude::*;
use shared::models::{SafeUser, UserRole};
use shared::validation::{validate_email, validate_password, MIN_PASSWORD_LENGTH};
use uuid::Uuid;

// ============================================================================
// Property Test Strategies
// ============================================================================

fn email_strategy() -> impl Strategy<Value = String> {
    "[a-z]{3,10}(\\.[a-z]{2,6})?@[a-z]{3,8}\\.(com|org|io|com\\.br)"
}

fn password_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9!@#$%çãé]{6,32}"
}

fn short_password_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9çãé]{0,5}"
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_well_formed_emails_are_accepted(email in email_strategy()) {
        prop_assert!(validate_email(&email).is_ok());
    }

    #[test]
    fn prop_emails_without_at_are_rejected(local in "[a-z.]{1,20}") {
        prop_assert!(validate_email(&local).is_err());
    }

    #[test]
    fn prop_long_enough_passwords_are_accepted(password in password_strategy()) {
        prop_assert!(validate_password(&password).is_ok());
    }

    /// Length is counted in characters, so accented passwords are not favored
    #[test]
    fn prop_short_passwords_are_rejected(password in short_password_strategy()) {
        prop_assert!(password.chars().count() < MIN_PASSWORD_LENGTH);
        prop_assert!(validate_password(&password).is_err());
    }
}

// ============================================================================
// Role Tests
// ============================================================================

#[cfg(test)]
mod role_tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!("admin".parse::<UserRole>(), Ok(UserRole::Admin));
        assert_eq!("user".parse::<UserRole>(), Ok(UserRole::User));
        assert!("root".parse::<UserRole>().is_err());
        assert!("Admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_only_admin_passes_guard() {
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::User.is_admin());
        assert_eq!(UserRole::default(), UserRole::User);
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_value(UserRole::Admin).unwrap(), "admin");
        let role: UserRole = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, UserRole::User);
    }
}

// ============================================================================
// Public User Shape Tests
// ============================================================================

#[cfg(test)]
mod safe_user_tests {
    use super::*;

    #[test]
    fn test_safe_user_has_no_password_field() {
        let user = SafeUser {
            id: Uuid::new_v4(),
            name: "Admin".to_string(),
            email: "admin@gdash.io".to_string(),
            role: UserRole::Admin,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();

        assert!(keys.contains(&"email"));
        assert!(keys.contains(&"role"));
        assert!(!keys.iter().any(|k| k.contains("password")));
    }
}
