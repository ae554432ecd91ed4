use super::required_text;
use crate::{
    entities::users,
    error::{AuthError, Result, ServiceError},
    password::{hash_password, verify_password},
};
use log::{info, warn};
use models::{Role, UserStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Token handed out on login. Nothing verifies it yet.
pub const PLACEHOLDER_TOKEN: &str = "mock-jwt-token";

#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    /// Case-insensitive role name; students when absent
    pub role: Option<String>,
}

/// A successful login
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: users::Model,
}

pub struct AuthService;

impl AuthService {
    pub async fn login(db: &DatabaseConnection, email: &str, password: &str) -> Result<Session> {
        let user = Self::find_by_email(db, email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !verify_password(password, &user.password)? {
            warn!("Rejected login for user {}: wrong password", user.id);
            return Err(AuthError::InvalidPassword.into());
        }

        Ok(Session {
            token: PLACEHOLDER_TOKEN.to_string(),
            user,
        })
    }

    pub async fn register(db: &DatabaseConnection, registration: Registration) -> Result<users::Model> {
        let first_name = required_text(registration.first_name, "firstName")?;
        let last_name = required_text(registration.last_name, "lastName")?;
        let email = required_text(registration.email, "email")?;
        let password = required_text(registration.password, "password")?;
        let role = match registration.role {
            Some(role) => role
                .parse::<Role>()
                .map_err(|e| ServiceError::validation(e.to_string()))?,
            None => Role::Student,
        };

        if Self::email_exists(db, &email).await? {
            return Err(ServiceError::Conflict("Email already exists".to_string()));
        }

        let user = users::ActiveModel {
            email: Set(email),
            password: Set(hash_password(&password)?),
            first_name: Set(first_name),
            last_name: Set(last_name),
            role: Set(role),
            status: Set(UserStatus::Active),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(|e| ServiceError::from_write(e, "Email already exists"))?;

        info!("Registered user {} as {}", user.id, user.role);
        Ok(user)
    }

    pub async fn email_exists(db: &DatabaseConnection, email: &str) -> Result<bool> {
        let count = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .count(db)
            .await?;

        Ok(count > 0)
    }

    async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<users::Model>> {
        Ok(users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(db)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::setup_db;

    fn registration(email: &str) -> Registration {
        Registration {
            first_name: Some("Jean".to_string()),
            last_name: Some("Dupont".to_string()),
            email: Some(email.to_string()),
            password: Some("password".to_string()),
            role: Some("teacher".to_string()),
        }
    }

    #[tokio::test]
    async fn register_then_login() {
        let db = setup_db().await;

        let user = AuthService::register(&db, registration("prof@campus.fr"))
            .await
            .unwrap();
        assert_eq!(user.role, Role::Teacher);
        assert_eq!(user.status, UserStatus::Active);
        assert_ne!(user.password, "password");

        let session = AuthService::login(&db, "prof@campus.fr", "password")
            .await
            .unwrap();
        assert_eq!(session.token, PLACEHOLDER_TOKEN);
        assert_eq!(session.user.id, user.id);
    }

    #[tokio::test]
    async fn login_failures_are_distinguishable() {
        let db = setup_db().await;
        AuthService::register(&db, registration("prof@campus.fr"))
            .await
            .unwrap();

        let unknown = AuthService::login(&db, "nobody@campus.fr", "password")
            .await
            .unwrap_err();
        let wrong = AuthService::login(&db, "prof@campus.fr", "nope")
            .await
            .unwrap_err();

        assert!(matches!(unknown, ServiceError::Auth(AuthError::UserNotFound)));
        assert!(matches!(wrong, ServiceError::Auth(AuthError::InvalidPassword)));
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let db = setup_db().await;
        AuthService::register(&db, registration("prof@campus.fr"))
            .await
            .unwrap();

        let err = AuthService::register(&db, registration("prof@campus.fr"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Conflict(ref m) if m == "Email already exists"));
    }

    #[tokio::test]
    async fn register_validates_role_and_fields() {
        let db = setup_db().await;

        let err = AuthService::register(
            &db,
            Registration {
                role: Some("janitor".to_string()),
                ..registration("a@campus.fr")
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m == "Unknown role: janitor"));

        let err = AuthService::register(
            &db,
            Registration {
                email: None,
                ..registration("b@campus.fr")
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m == "email is required"));

        let student = AuthService::register(
            &db,
            Registration {
                role: None,
                ..registration("c@campus.fr")
            },
        )
        .await
        .unwrap();
        assert_eq!(student.role, Role::Student);
    }
}
