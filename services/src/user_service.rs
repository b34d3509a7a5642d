use crate::error::ServiceError;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use db::models::user::{self, Role};
use sea_orm::DatabaseConnection;

pub use db::models::user::Model as User;

#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
}

pub struct UserService;

impl UserService {
    /// Registers a new account. Emails are compared after trimming and lowercasing.
    pub async fn register(db: &DatabaseConnection, params: CreateUser) -> Result<User, ServiceError> {
        let email = normalize_email(&params.email);
        let full_name = params.full_name.trim();

        if full_name.is_empty() {
            return Err(ServiceError::Validation("Full name cannot be empty".into()));
        }
        if user::Model::find_by_email(db, &email).await?.is_some() {
            return Err(ServiceError::Conflict("Email already registered".into()));
        }

        let hash = Self::hash_password(&params.password)?;
        let user = user::Model::create(db, &email, &hash, full_name, params.role)
            .await
            .map_err(|e| {
                ServiceError::on_unique_violation(e, ServiceError::Conflict("Email already registered".into()))
            })?;

        tracing::info!(user_id = user.id, role = %user.role, "Registered user");
        Ok(user)
    }

    /// Returns the user when `password` matches the stored hash.
    pub async fn verify_credentials(
        db: &DatabaseConnection,
        email: &str,
        password: &str,
    ) -> Result<User, ServiceError> {
        let email = normalize_email(email);

        match user::Model::find_by_email(db, &email).await? {
            Some(user) if Self::verify_password(&user, password) => Ok(user),
            _ => Err(ServiceError::Unauthorized("Incorrect email or password".into())),
        }
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<User, ServiceError> {
        user::Model::find_by_id(db, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))
    }

    pub fn hash_password(password: &str) -> Result<String, ServiceError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| ServiceError::PasswordHash(e.to_string()))
    }

    pub fn verify_password(user: &User, password: &str) -> bool {
        let parsed = match PasswordHash::new(&user.password_hash) {
            Ok(parsed) => parsed,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use db::test_utils::setup_test_db;

    fn params(email: &str, password: &str) -> CreateUser {
        CreateUser {
            email: email.into(),
            password: password.into(),
            full_name: "Grace Hopper".into(),
            role: Role::Teacher,
        }
    }

    #[tokio::test]
    async fn test_register_and_verify() {
        let db = setup_test_db().await;

        let user = UserService::register(&db, params("Grace@School.test ", "password123"))
            .await
            .unwrap();
        assert_eq!(user.email, "grace@school.test");
        assert_ne!(user.password_hash, "password123");

        let found = UserService::verify_credentials(&db, "grace@school.test", "password123")
            .await
            .unwrap();
        assert_eq!(found.id, user.id);
    }

    #[tokio::test]
    async fn test_wrong_password_is_unauthorized() {
        let db = setup_test_db().await;
        UserService::register(&db, params("g@school.test", "password123")).await.unwrap();

        let err = UserService::verify_credentials(&db, "g@school.test", "nope")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized(_)));

        let err = UserService::verify_credentials(&db, "missing@school.test", "password123")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let db = setup_test_db().await;
        UserService::register(&db, params("dup@school.test", "password123")).await.unwrap();

        let err = UserService::register(&db, params("DUP@school.test", "password123"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let db = setup_test_db().await;
        let err = UserService::find_by_id(&db, 999).await.unwrap_err();
        assert_eq!(err.to_string(), "User not found");
    }
}
