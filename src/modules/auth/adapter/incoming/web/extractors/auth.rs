use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// Represents a user with a valid session token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

/// The session token travels either as the `token` cookie the login flow
/// sets, or as a Bearer header for non-browser clients.
fn extract_token(req: &HttpRequest) -> Option<String> {
    if let Some(cookie) = req.cookie("token") {
        return Some(cookie.value().to_string());
    }

    req.headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|v| v.to_string())
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(provider) => provider,
                None => {
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_SESSION_TOKEN",
                    "Missing session cookie or authorization header",
                ))));
            }
        };

        match token_provider.verify_session_token(&token) {
            Ok(user_id) => ready(Ok(AuthenticatedUser { user_id })),
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_SESSION_TOKEN",
                "Invalid or expired session token",
            )))),
        }
    }
}
