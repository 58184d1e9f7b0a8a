use async_trait::async_trait;
use chrono::NaiveDate;
use std::fmt;

use crate::modules::auth::domain::entities::User;

/// Data required to insert a new user. The password arrives already hashed;
/// hashing happens explicitly at the call site, never inside the repository.
#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub email: String,
    pub password_hash: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub is_email_verified: bool,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: CreateUserData) -> Result<User, UserRepositoryError>;
}

#[derive(Debug, Clone)]
pub enum UserRepositoryError {
    EmailAlreadyRegistered,
    UserNotFound,
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for UserRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRepositoryError::EmailAlreadyRegistered => write!(f, "Email already registered"),
            UserRepositoryError::UserNotFound => write!(f, "User not found"),
            UserRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for UserRepositoryError {}
