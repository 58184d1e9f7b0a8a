use async_trait::async_trait;
use serde::Deserialize;

use crate::modules::auth::application::ports::outgoing::oauth_provider::{
    OAuthProfile, OAuthProvider, OAuthProviderError,
};

const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const USERINFO_ENDPOINT: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

#[derive(Clone)]
pub struct GoogleOAuthClient {
    http: reqwest::Client,
    client_id: String,
    client_secret: String,
    redirect_url: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct UserInfoResponse {
    email: Option<String>,
    name: Option<String>,
    picture: Option<String>,
}

impl GoogleOAuthClient {
    pub fn new(client_id: String, client_secret: String, redirect_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            client_id,
            client_secret,
            redirect_url,
        }
    }

    pub fn from_env() -> Self {
        let client_id =
            std::env::var("GOOGLE_CLIENT_ID").expect("GOOGLE_CLIENT_ID is not set in .env file");
        let client_secret = std::env::var("GOOGLE_CLIENT_SECRET")
            .expect("GOOGLE_CLIENT_SECRET is not set in .env file");
        let redirect_url = std::env::var("OAUTH_REDIRECT_URL")
            .expect("OAUTH_REDIRECT_URL is not set in .env file");

        Self::new(client_id, client_secret, redirect_url)
    }
}

#[async_trait]
impl OAuthProvider for GoogleOAuthClient {
    async fn exchange_code(&self, code: &str) -> Result<OAuthProfile, OAuthProviderError> {
        let token: TokenResponse = self
            .http
            .post(TOKEN_ENDPOINT)
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("client_id", &self.client_id),
                ("client_secret", &self.client_secret),
                ("redirect_uri", &self.redirect_url),
            ])
            .send()
            .await
            .map_err(|e| OAuthProviderError::ExchangeFailed(e.to_string()))?
            .error_for_status()
            .map_err(|e| OAuthProviderError::ExchangeFailed(e.to_string()))?
            .json()
            .await
            .map_err(|e| OAuthProviderError::ExchangeFailed(e.to_string()))?;

        let info: UserInfoResponse = self
            .http
            .get(USERINFO_ENDPOINT)
            .bearer_auth(&token.access_token)
            .send()
            .await
            .map_err(|e| OAuthProviderError::ExchangeFailed(e.to_string()))?
            .error_for_status()
            .map_err(|e| OAuthProviderError::ExchangeFailed(e.to_string()))?
            .json()
            .await
            .map_err(|e| OAuthProviderError::ExchangeFailed(e.to_string()))?;

        let email = info
            .email
            .filter(|e| !e.trim().is_empty())
            .ok_or(OAuthProviderError::MissingEmail)?;

        Ok(OAuthProfile {
            email,
            name: info.name,
            picture: info.picture,
        })
    }
}
