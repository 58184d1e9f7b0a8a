use crate::api::schemas::ErrorResponse;
use crate::modules::auth::application::use_cases::oauth_sign_in::OAuthSignInError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

#[derive(Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
}

/// OAuth sign-in callback
///
/// Exchanges the authorization code, upserts the account by provider
/// email, sets the session cookie, and redirects to the dashboard.
#[utoipa::path(
    get,
    path = "/api/auth/oauth/callback",
    tag = "auth",
    params(
        ("code" = Option<String>, Query, description = "Authorization code from the provider")
    ),
    responses(
        (status = 302, description = "Signed in, session cookie set, redirect to /dashboard"),
        (status = 400, description = "Missing or unusable authorization code", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/auth/oauth/callback")]
pub async fn oauth_callback_handler(
    query: web::Query<OAuthCallbackQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let code = match query.into_inner().code {
        Some(code) if !code.trim().is_empty() => code,
        _ => {
            warn!("OAuth callback without an authorization code");
            return ApiResponse::bad_request("MISSING_AUTH_CODE", "Missing authorization code");
        }
    };

    let use_case = &data.oauth_sign_in_use_case;

    match use_case.execute(&code).await {
        Ok(response) => {
            info!(user_id = %response.user_id, "OAuth sign-in completed");

            let cookie = Cookie::build("token", response.session_token.clone())
                .same_site(SameSite::Strict)
                .http_only(true)
                .path("/")
                .finish();

            HttpResponse::Found()
                .cookie(cookie)
                .insert_header(("Location", "/dashboard"))
                .finish()
        }

        Err(OAuthSignInError::MissingEmail) => {
            warn!("OAuth provider returned no email");
            ApiResponse::bad_request(
                "MISSING_PROVIDER_EMAIL",
                "The provider account has no email address",
            )
        }

        Err(OAuthSignInError::ExchangeFailed(ref e)) => {
            warn!(error = %e, "OAuth code exchange failed");
            ApiResponse::bad_request("CODE_EXCHANGE_FAILED", "Authorization code was rejected")
        }

        Err(OAuthSignInError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(OAuthSignInError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error during OAuth sign-in");
            ApiResponse::internal_error()
        }
    }
}
