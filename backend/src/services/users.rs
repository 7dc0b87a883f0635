//! User management service

use bcrypt::hash;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::config::AdminConfig;
use crate::error::{AppError, AppResult};
use shared::models::{SafeUser, UserRole};

/// Work factor for stored password hashes
pub const BCRYPT_COST: u32 = 10;

/// User row as stored, including the password hash
#[derive(Debug, sqlx::FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRow {
    /// Drop the password hash
    pub fn into_safe(self) -> SafeUser {
        SafeUser {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role.parse().unwrap_or_default(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserInput {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[serde(default)]
    pub role: UserRole,
}

/// Partial update; absent fields are left untouched
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUserInput {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: Option<String>,
    pub role: Option<UserRole>,
}

const USER_COLUMNS: &str = "id, name, email, password_hash, role, created_at, updated_at";

/// User management service
#[derive(Clone)]
pub struct UserService {
    db: PgPool,
}

impl UserService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create the configured admin account if it does not exist yet.
    ///
    /// Returns `true` when an account was created.
    pub async fn seed_default_admin(&self, admin: &AdminConfig) -> AppResult<bool> {
        let (Some(email), Some(password)) = (&admin.email, &admin.password) else {
            tracing::debug!("No default admin configured");
            return Ok(false);
        };

        let email = normalize_email(email);
        let exists = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(&email)
            .fetch_one(&self.db)
            .await?;

        if exists > 0 {
            tracing::debug!(%email, "Default admin already present");
            return Ok(false);
        }

        self.create(CreateUserInput {
            name: admin.name.clone(),
            email: email.clone(),
            password: password.clone(),
            role: UserRole::Admin,
        })
        .await?;

        tracing::info!(%email, "Default admin user created");
        Ok(true)
    }

    pub async fn create(&self, input: CreateUserInput) -> AppResult<SafeUser> {
        input.validate()?;

        let password_hash = hash_password(&input.password)?;

        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            INSERT INTO users (name, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(input.name.trim())
        .bind(normalize_email(&input.email))
        .bind(&password_hash)
        .bind(input.role.as_str())
        .fetch_one(&self.db)
        .await
        .map_err(|e| AppError::from_unique_violation(e, "email"))?;

        Ok(row.into_safe())
    }

    pub async fn list(&self) -> AppResult<Vec<SafeUser>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {} FROM users ORDER BY created_at DESC",
            USER_COLUMNS
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(UserRow::into_safe).collect())
    }

    pub async fn get(&self, id: Uuid) -> AppResult<SafeUser> {
        sqlx::query_as::<_, UserRow>(&format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS))
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .map(UserRow::into_safe)
            .ok_or_else(|| AppError::NotFound("Usuário".to_string()))
    }

    pub async fn update(&self, id: Uuid, input: UpdateUserInput) -> AppResult<SafeUser> {
        input.validate()?;

        let password_hash = input.password.as_deref().map(hash_password).transpose()?;

        sqlx::query_as::<_, UserRow>(&format!(
            r#"
            UPDATE users SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                password_hash = COALESCE($4, password_hash),
                role = COALESCE($5, role),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(id)
        .bind(input.name.as_deref().map(str::trim))
        .bind(input.email.as_deref().map(normalize_email))
        .bind(password_hash)
        .bind(input.role.map(|r| r.as_str()))
        .fetch_optional(&self.db)
        .await
        .map_err(|e| AppError::from_unique_violation(e, "email"))?
        .map(UserRow::into_safe)
        .ok_or_else(|| AppError::NotFound("Usuário".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Usuário".to_string()));
        }
        Ok(())
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn hash_password(password: &str) -> AppResult<String> {
    hash(password, BCRYPT_COST)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Admin@GDASH.io "), "admin@gdash.io");
    }

    #[test]
    fn test_create_input_validation() {
        let input = CreateUserInput {
            name: "Ana".to_string(),
            email: "ana@gdash.io".to_string(),
            password: "123456".to_string(),
            role: UserRole::User,
        };
        assert!(input.validate().is_ok());

        let short = CreateUserInput {
            password: "123".to_string(),
            ..input
        };
        let err: AppError = short.validate().unwrap_err().into();
        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "password"));
    }

    #[test]
    fn test_update_input_skips_absent_fields() {
        assert!(UpdateUserInput::default().validate().is_ok());

        let bad_email = UpdateUserInput {
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_role_defaults_when_absent() {
        let input: CreateUserInput = serde_json::from_str(
            r#"{"name": "Ana", "email": "ana@gdash.io", "password": "123456"}"#,
        )
        .unwrap();
        assert_eq!(input.role, UserRole::User);
    }

    #[test]
    fn test_row_into_safe_parses_role() {
        let row = UserRow {
            id: Uuid::new_v4(),
            name: "Root".to_string(),
            email: "root@gdash.io".to_string(),
            password_hash: "$2b$10$hash".to_string(),
            role: "admin".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(row.into_safe().role, UserRole::Admin);
    }

    #[test]
    fn test_hash_uses_configured_cost() {
        let hashed = hash_password("123456").unwrap();
        assert!(hashed.starts_with("$2b$10$"));
        assert!(bcrypt::verify("123456", &hashed).unwrap());
    }
}
