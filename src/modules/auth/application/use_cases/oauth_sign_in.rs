use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{
    user_repository::CreateUserData, OAuthProfile, OAuthProvider, TokenProvider, UserQuery,
    UserRepository,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum OAuthSignInError {
    #[error("Code exchange failed: {0}")]
    ExchangeFailed(String),

    #[error("Provider returned no email for this account")]
    MissingEmail,

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct OAuthSignInResponse {
    pub session_token: String,
    pub user_id: Uuid,
}

#[async_trait]
pub trait IOAuthSignInUseCase: Send + Sync {
    async fn execute(&self, code: &str) -> Result<OAuthSignInResponse, OAuthSignInError>;
}

/// Upserts a user by provider email on every sign-in callback and reissues
/// the session token, mirroring a provider-based sign-in flow.
#[derive(Clone)]
pub struct OAuthSignInUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    provider: Arc<dyn OAuthProvider>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q, R> OAuthSignInUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        provider: Arc<dyn OAuthProvider>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            repository,
            provider,
            token_provider,
        }
    }

    fn profile_to_create_data(profile: &OAuthProfile) -> CreateUserData {
        // "Jane van Dyk" -> first "Jane", last "van Dyk"
        let name = profile.name.clone().unwrap_or_default();
        let mut parts = name.splitn(2, ' ');
        let first_name = parts.next().unwrap_or("").to_string();
        let last_name = parts.next().unwrap_or("").to_string();

        CreateUserData {
            email: profile.email.to_lowercase(),
            password_hash: None,
            first_name,
            last_name,
            date_of_birth: None,
            phone: None,
            bio: None,
            avatar: profile.picture.clone(),
            is_email_verified: true,
        }
    }
}

#[async_trait]
impl<Q, R> IOAuthSignInUseCase for OAuthSignInUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, code: &str) -> Result<OAuthSignInResponse, OAuthSignInError> {
        let profile = self.provider.exchange_code(code).await.map_err(|e| {
            use crate::modules::auth::application::ports::outgoing::OAuthProviderError;
            match e {
                OAuthProviderError::MissingEmail => OAuthSignInError::MissingEmail,
                other => OAuthSignInError::ExchangeFailed(other.to_string()),
            }
        })?;

        if profile.email.trim().is_empty() {
            return Err(OAuthSignInError::MissingEmail);
        }

        let existing = self
            .query
            .find_by_email(&profile.email.to_lowercase())
            .await
            .map_err(|e| OAuthSignInError::RepositoryError(e.to_string()))?;

        let user_id = match existing {
            Some(user) => user.id,
            None => {
                let created = self
                    .repository
                    .create_user(Self::profile_to_create_data(&profile))
                    .await
                    .map_err(|e| OAuthSignInError::RepositoryError(e.to_string()))?;
                created.id
            }
        };

        let session_token = self
            .token_provider
            .sign_session_token(user_id)
            .map_err(OAuthSignInError::TokenGenerationFailed)?;

        Ok(OAuthSignInResponse {
            session_token,
            user_id,
        })
    }
}
