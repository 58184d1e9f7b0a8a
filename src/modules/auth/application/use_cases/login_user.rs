use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserQuery,
};
use email_address::EmailAddress;

// ========================= Login Request =========================
/// Validated login request - can be deserialized directly from JSON
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone)]
pub enum LoginRequestError {
    EmptyEmail,
    InvalidEmailFormat,
    EmptyPassword,
}

impl std::fmt::Display for LoginRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginRequestError::EmptyEmail => write!(f, "Email cannot be empty"),
            LoginRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            LoginRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for LoginRequestError {}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = email.trim().to_lowercase();

        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(&email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }

        if password.trim().is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            email: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.email, helper.password).map_err(serde::de::Error::custom)
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone)]
pub enum LoginError {
    UserNotFound,
    InvalidPassword,
    PasswordVerificationFailed(String),
    TokenGenerationFailed(String),
    QueryError(String),
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::UserNotFound => write!(f, "User not found"),
            LoginError::InvalidPassword => write!(
                f,
                "Your password is incorrect or you haven't got a password for yourself yet"
            ),
            LoginError::PasswordVerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
            LoginError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            LoginError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for LoginError {}

// ============================ Login Response =================================
#[derive(Debug, Clone)]
pub struct LoggedInUser {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_email_verified: bool,
}

#[derive(Debug, Clone)]
pub struct LoginUserResponse {
    pub session_token: String,
    pub user: LoggedInUser,
}

// ============================ Login User Use Case =============================
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        let user = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::UserNotFound)?;

        // OAuth-only accounts have no password hash to check against
        let stored_hash = user
            .password_hash
            .as_deref()
            .ok_or(LoginError::InvalidPassword)?;

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), stored_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidPassword);
        }

        let session_token = self
            .token_provider
            .sign_session_token(user.id)
            .map_err(LoginError::TokenGenerationFailed)?;

        Ok(LoginUserResponse {
            session_token,
            user: LoggedInUser {
                id: user.id,
                email: user.email,
                first_name: user.first_name,
                last_name: user.last_name,
                is_email_verified: user.is_email_verified,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::ports::outgoing::{HashError, UserQueryError};
    use crate::modules::auth::domain::entities::User;
    use serde_json::json;

    // ==================== LoginRequest Tests ====================

    #[test]
    fn login_request_normalizes_email() {
        let request =
            LoginRequest::new("  Ada@Example.COM  ".to_string(), "secret123".to_string()).unwrap();
        assert_eq!(request.email(), "ada@example.com");
    }

    #[test]
    fn login_request_rejects_empty_password() {
        let result = LoginRequest::new("ada@example.com".to_string(), "   ".to_string());
        assert!(matches!(result, Err(LoginRequestError::EmptyPassword)));
    }

    #[test]
    fn login_request_deserialize_rejects_bad_email() {
        let json = json!({ "email": "nope", "password": "secret123" });
        let result: Result<LoginRequest, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    // ==================== Use Case Tests ====================

    #[derive(Default)]
    struct MockUserQuery {
        user: Option<User>,
        should_fail: bool,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<User>, UserQueryError> {
            Ok(None)
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
            if self.should_fail {
                return Err(UserQueryError::DatabaseError("connection lost".to_string()));
            }
            Ok(self.user.clone().filter(|u| u.email == email))
        }
    }

    struct MockHasher {
        should_verify: bool,
    }

    #[async_trait]
    impl PasswordHasher for MockHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            Ok("hashed_password".to_string())
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            Ok(self.should_verify)
        }
    }

    struct MockTokenProvider;

    impl TokenProvider for MockTokenProvider {
        fn sign_session_token(&self, _user_id: Uuid) -> Result<String, String> {
            Ok("signed.session.token".to_string())
        }

        fn verify_session_token(&self, _token: &str) -> Result<Uuid, String> {
            Err("not used".to_string())
        }
    }

    fn test_user(password_hash: Option<&str>) -> User {
        User {
            id: Uuid::new_v4(),
            email: "ada@example.com".to_string(),
            password_hash: password_hash.map(|h| h.to_string()),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            date_of_birth: None,
            phone: None,
            bio: None,
            avatar: None,
            is_email_verified: true,
            two_factor_enabled: false,
            biometric_enabled: false,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn request() -> LoginRequest {
        LoginRequest::new("ada@example.com".to_string(), "secret123".to_string()).unwrap()
    }

    #[tokio::test]
    async fn login_success() {
        let use_case = LoginUserUseCase::new(
            MockUserQuery {
                user: Some(test_user(Some("hashed_password"))),
                should_fail: false,
            },
            Arc::new(MockHasher {
                should_verify: true,
            }),
            Arc::new(MockTokenProvider),
        );

        let result = use_case.execute(request()).await;

        assert!(result.is_ok(), "Expected successful login, got {:?}", result.err());
        let response = result.unwrap();
        assert_eq!(response.session_token, "signed.session.token");
        assert_eq!(response.user.email, "ada@example.com");
        assert_eq!(response.user.first_name, "Ada");
    }

    #[tokio::test]
    async fn login_unknown_email_is_user_not_found() {
        let use_case = LoginUserUseCase::new(
            MockUserQuery::default(),
            Arc::new(MockHasher {
                should_verify: true,
            }),
            Arc::new(MockTokenProvider),
        );

        let result = use_case.execute(request()).await;
        assert!(matches!(result, Err(LoginError::UserNotFound)));
    }

    #[tokio::test]
    async fn login_wrong_password() {
        let use_case = LoginUserUseCase::new(
            MockUserQuery {
                user: Some(test_user(Some("hashed_password"))),
                should_fail: false,
            },
            Arc::new(MockHasher {
                should_verify: false,
            }),
            Arc::new(MockTokenProvider),
        );

        let result = use_case.execute(request()).await;
        assert!(matches!(result, Err(LoginError::InvalidPassword)));
    }

    #[tokio::test]
    async fn login_oauth_only_account_has_no_password() {
        let use_case = LoginUserUseCase::new(
            MockUserQuery {
                user: Some(test_user(None)),
                should_fail: false,
            },
            Arc::new(MockHasher {
                should_verify: true,
            }),
            Arc::new(MockTokenProvider),
        );

        let result = use_case.execute(request()).await;
        assert!(matches!(result, Err(LoginError::InvalidPassword)));
    }

    #[tokio::test]
    async fn login_query_failure_is_mapped() {
        let use_case = LoginUserUseCase::new(
            MockUserQuery {
                user: None,
                should_fail: true,
            },
            Arc::new(MockHasher {
                should_verify: true,
            }),
            Arc::new(MockTokenProvider),
        );

        let result = use_case.execute(request()).await;
        match result {
            Err(LoginError::QueryError(msg)) => assert!(msg.contains("connection lost")),
            other => panic!("Expected QueryError, got {:?}", other),
        }
    }
}
