use async_trait::async_trait;

/// Profile returned by the identity provider after a successful code
/// exchange.
#[derive(Debug, Clone)]
pub struct OAuthProfile {
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum OAuthProviderError {
    #[error("Code exchange failed: {0}")]
    ExchangeFailed(String),

    #[error("Provider returned no email for this account")]
    MissingEmail,
}

#[async_trait]
pub trait OAuthProvider: Send + Sync {
    async fn exchange_code(&self, code: &str) -> Result<OAuthProfile, OAuthProviderError>;
}
