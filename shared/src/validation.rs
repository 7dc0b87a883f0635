//! Validation utilities for the weather dashboard
//!
//! The analyzer never validates its input; these checks are applied at the
//! ingestion and account-management boundaries.

use crate::models::WeatherSample;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_CITY_LENGTH: usize = 120;

// ============================================================================
// Account Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err("Invalid email format");
    };
    if local.is_empty() || !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.')
    {
        return Err("Invalid email format");
    }
    if email.chars().any(char::is_whitespace) {
        return Err("Invalid email format");
    }
    Ok(())
}

/// Validate password length
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}

// ============================================================================
// Weather Validations
// ============================================================================

pub fn validate_city(city: &str) -> Result<(), &'static str> {
    let trimmed = city.trim();
    if trimmed.is_empty() {
        return Err("City is required");
    }
    if trimmed.chars().count() > MAX_CITY_LENGTH {
        return Err("City must be at most 120 characters");
    }
    Ok(())
}

/// Validate an incoming observation before it is stored
pub fn validate_sample(sample: &WeatherSample) -> Result<(), &'static str> {
    validate_city(&sample.city)?;

    if !sample.temperature.is_finite() {
        return Err("Temperature must be a finite number");
    }
    if !sample.humidity.is_finite() || !(0.0..=100.0).contains(&sample.humidity) {
        return Err("Humidity must be between 0 and 100%");
    }
    if !sample.wind_speed.is_finite() || sample.wind_speed < 0.0 {
        return Err("Wind speed cannot be negative");
    }
    if sample.feels_like.is_some_and(|v| !v.is_finite()) {
        return Err("Feels-like temperature must be a finite number");
    }
    if sample.pressure.is_some_and(|v| !v.is_finite() || v <= 0.0) {
        return Err("Pressure must be a positive number");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample(temperature: f64, humidity: f64, wind: f64) -> WeatherSample {
        WeatherSample::new("Penápolis", Utc::now(), temperature, humidity, wind)
    }

    // ========================================================================
    // Account Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_email() {
        assert!(validate_email("admin@gdash.io").is_ok());
        assert!(validate_email("a.b@c.com.br").is_ok());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("@gdash.io").is_err());
        assert!(validate_email("admin@localhost").is_err());
        assert!(validate_email("ad min@gdash.io").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("123456").is_ok());
        assert!(validate_password("12345").is_err());
        // Counted in characters, not bytes
        assert!(validate_password("çççç").is_err());
    }

    // ========================================================================
    // Weather Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_city() {
        assert!(validate_city("São Paulo").is_ok());
        assert!(validate_city("   ").is_err());
        assert!(validate_city(&"x".repeat(121)).is_err());
    }

    #[test]
    fn test_validate_sample_ranges() {
        assert!(validate_sample(&sample(25.0, 50.0, 10.0)).is_ok());
        assert!(validate_sample(&sample(-40.0, 0.0, 0.0)).is_ok());
        assert!(validate_sample(&sample(25.0, 101.0, 10.0)).is_err());
        assert!(validate_sample(&sample(25.0, -1.0, 10.0)).is_err());
        assert!(validate_sample(&sample(25.0, 50.0, -0.5)).is_err());
        assert!(validate_sample(&sample(f64::NAN, 50.0, 10.0)).is_err());
        assert!(validate_sample(&sample(f64::INFINITY, 50.0, 10.0)).is_err());
    }

    #[test]
    fn test_validate_sample_optionals() {
        assert!(validate_sample(&sample(25.0, 50.0, 10.0).with_pressure(1013.0)).is_ok());
        assert!(validate_sample(&sample(25.0, 50.0, 10.0).with_pressure(0.0)).is_err());
        assert!(validate_sample(&sample(25.0, 50.0, 10.0).with_feels_like(f64::NAN)).is_err());
    }
}
