use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{
    user_repository::CreateUserData, PasswordHasher, TokenProvider, UserRepository,
    UserRepositoryError,
};
use email_address::EmailAddress;

// ========================= Register Request =========================
/// Validated registration request - can be deserialized directly from JSON
#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    email: String,
    password: String,
    first_name: String,
    last_name: String,
    date_of_birth: Option<NaiveDate>,
    phone: Option<String>,
    bio: Option<String>,
    avatar: Option<String>,
}

#[derive(Debug, Clone)]
pub enum RegisterRequestError {
    EmptyEmail,
    InvalidEmailFormat,
    PasswordTooShort,
    EmptyFirstName,
    EmptyLastName,
    BioTooLong,
}

impl std::fmt::Display for RegisterRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterRequestError::EmptyEmail => write!(f, "Email cannot be empty"),
            RegisterRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            RegisterRequestError::PasswordTooShort => {
                write!(f, "Password must be at least 8 characters")
            }
            RegisterRequestError::EmptyFirstName => write!(f, "First name cannot be empty"),
            RegisterRequestError::EmptyLastName => write!(f, "Last name cannot be empty"),
            RegisterRequestError::BioTooLong => write!(f, "Bio cannot exceed 500 characters"),
        }
    }
}

impl std::error::Error for RegisterRequestError {}

impl RegisterUserRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        email: String,
        password: String,
        first_name: String,
        last_name: String,
        date_of_birth: Option<NaiveDate>,
        phone: Option<String>,
        bio: Option<String>,
        avatar: Option<String>,
    ) -> Result<Self, RegisterRequestError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(RegisterRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(&email) {
            return Err(RegisterRequestError::InvalidEmailFormat);
        }

        if password.len() < 8 {
            return Err(RegisterRequestError::PasswordTooShort);
        }

        let first_name = first_name.trim().to_string();
        if first_name.is_empty() {
            return Err(RegisterRequestError::EmptyFirstName);
        }

        let last_name = last_name.trim().to_string();
        if last_name.is_empty() {
            return Err(RegisterRequestError::EmptyLastName);
        }

        if let Some(bio) = &bio {
            if bio.len() > 500 {
                return Err(RegisterRequestError::BioTooLong);
            }
        }

        Ok(Self {
            email,
            password,
            first_name,
            last_name,
            date_of_birth,
            phone: phone.map(|p| p.trim().to_string()),
            bio,
            avatar,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

// Custom deserialization that validates during parsing
impl<'de> Deserialize<'de> for RegisterUserRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct RegisterUserRequestHelper {
            email: String,
            password: String,
            first_name: String,
            last_name: String,
            date_of_birth: Option<NaiveDate>,
            phone: Option<String>,
            bio: Option<String>,
            avatar: Option<String>,
        }

        let helper = RegisterUserRequestHelper::deserialize(deserializer)?;
        RegisterUserRequest::new(
            helper.email,
            helper.password,
            helper.first_name,
            helper.last_name,
            helper.date_of_birth,
            helper.phone,
            helper.bio,
            helper.avatar,
        )
        .map_err(serde::de::Error::custom)
    }
}

// ====================== Register Error =============================
#[derive(Debug, Clone)]
pub enum RegisterUserError {
    EmailAlreadyRegistered,
    HashingFailed(String),
    TokenGenerationFailed(String),
    RepositoryError(String),
}

impl std::fmt::Display for RegisterUserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterUserError::EmailAlreadyRegistered => {
                write!(f, "An account with this email already exists")
            }
            RegisterUserError::HashingFailed(msg) => write!(f, "Password hashing failed: {}", msg),
            RegisterUserError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            RegisterUserError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for RegisterUserError {}

// ====================== Register Response ==========================
#[derive(Debug, Clone)]
pub struct RegisterUserResponse {
    pub message: String,
    pub session_token: String,
    pub user_id: Uuid,
    pub email: String,
}

// ====================== Register User Use Case =====================
#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(
        &self,
        request: RegisterUserRequest,
    ) -> Result<RegisterUserResponse, RegisterUserError>;
}

#[derive(Clone)]
pub struct RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<R> RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> IRegisterUserUseCase for RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        request: RegisterUserRequest,
    ) -> Result<RegisterUserResponse, RegisterUserError> {
        // Hash explicitly here, not in a persistence hook
        let password_hash = self
            .password_hasher
            .hash_password(request.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let created = self
            .repository
            .create_user(CreateUserData {
                email: request.email.clone(),
                password_hash: Some(password_hash),
                first_name: request.first_name.clone(),
                last_name: request.last_name.clone(),
                date_of_birth: request.date_of_birth,
                phone: request.phone.clone(),
                bio: request.bio.clone(),
                avatar: request.avatar.clone(),
                is_email_verified: false,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailAlreadyRegistered => {
                    RegisterUserError::EmailAlreadyRegistered
                }
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        let session_token = self
            .token_provider
            .sign_session_token(created.id)
            .map_err(RegisterUserError::TokenGenerationFailed)?;

        Ok(RegisterUserResponse {
            message: format!(
                "{} {} has been registered successfully",
                created.first_name, created.last_name
            ),
            session_token,
            user_id: created.id,
            email: created.email,
        })
    }
}
