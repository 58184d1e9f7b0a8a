use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use utoipa::ToSchema;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Email address
    #[schema(example = "jane@example.com")]
    pub email: String,

    /// Password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// Human-readable confirmation
    #[schema(example = "User logged in successfully")]
    message: String,

    /// Authenticated user information
    user: LoginUserInfo,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginUserInfo {
    /// User ID, always a plain string
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    /// Email address
    #[schema(example = "jane@example.com")]
    email: String,

    #[schema(example = "Jane")]
    first_name: String,

    #[schema(example = "Doe")]
    last_name: String,

    #[schema(example = true)]
    is_email_verified: bool,
}

/// User login
///
/// Resolves email/password against the stored hash and sets the session
/// cookie on success.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful, session cookie set",
            body = inline(SuccessResponse<LoginResponse>)
        ),
        (
            status = 404,
            description = "No account for this email",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "USER_NOT_FOUND", "message": "User not found" }
            })
        ),
        (
            status = 401,
            description = "Password mismatch",
            body = ErrorResponse
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        ),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.login_user_use_case;
    let dto = req.into_inner();

    info!(email = %dto.email, "Login attempt");

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match use_case.execute(request).await {
        Ok(response) => {
            info!(user_id = %response.user.id, "User logged in successfully");

            let cookie = Cookie::build("token", response.session_token.clone())
                .same_site(SameSite::Strict)
                .path("/")
                .finish();

            let body = ApiResponse::<LoginResponse> {
                success: true,
                data: Some(LoginResponse {
                    message: "User logged in successfully".to_string(),
                    user: LoginUserInfo {
                        id: response.user.id.to_string(),
                        email: response.user.email,
                        first_name: response.user.first_name,
                        last_name: response.user.last_name,
                        is_email_verified: response.user.is_email_verified,
                    },
                }),
                error: None,
            };

            HttpResponse::Ok().cookie(cookie).json(body)
        }

        Err(LoginError::UserNotFound) => {
            warn!("Login failed: user not found");
            ApiResponse::not_found("USER_NOT_FOUND", &LoginError::UserNotFound.to_string())
        }

        Err(LoginError::InvalidPassword) => {
            warn!("Login failed: invalid password");
            ApiResponse::unauthorized("INVALID_PASSWORD", &LoginError::InvalidPassword.to_string())
        }

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::use_cases::login_user::{
        ILoginUserUseCase, LoggedInUser, LoginUserResponse,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    struct MockLoginSuccess;

    #[async_trait]
    impl ILoginUserUseCase for MockLoginSuccess {
        async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
            Ok(LoginUserResponse {
                session_token: "signed.session.token".to_string(),
                user: LoggedInUser {
                    id: Uuid::new_v4(),
                    email: "jane@example.com".to_string(),
                    first_name: "Jane".to_string(),
                    last_name: "Doe".to_string(),
                    is_email_verified: true,
                },
            })
        }
    }

    struct MockLoginUserNotFound;

    #[async_trait]
    impl ILoginUserUseCase for MockLoginUserNotFound {
        async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
            Err(LoginError::UserNotFound)
        }
    }

    struct MockLoginInvalidPassword;

    #[async_trait]
    impl ILoginUserUseCase for MockLoginInvalidPassword {
        async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
            Err(LoginError::InvalidPassword)
        }
    }

    #[actix_web::test]
    async fn login_success_sets_session_cookie() {
        let state = TestAppStateBuilder::new()
            .with_login_use_case(std::sync::Arc::new(MockLoginSuccess))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(login_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "jane@example.com",
                "password": "SecurePass123!"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let set_cookie = resp
            .headers()
            .get("set-cookie")
            .expect("session cookie should be set")
            .to_str()
            .unwrap();
        assert!(set_cookie.starts_with("token="));
        assert!(set_cookie.contains("SameSite=Strict"));
    }

    #[actix_web::test]
    async fn login_unknown_user_is_404_with_message() {
        let state = TestAppStateBuilder::new()
            .with_login_use_case(std::sync::Arc::new(MockLoginUserNotFound))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(login_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "ghost@example.com",
                "password": "whatever1"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "User not found");
    }

    #[actix_web::test]
    async fn login_wrong_password_is_401_with_original_message() {
        let state = TestAppStateBuilder::new()
            .with_login_use_case(std::sync::Arc::new(MockLoginInvalidPassword))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(login_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "jane@example.com",
                "password": "wrongpass"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"]["message"],
            "Your password is incorrect or you haven't got a password for yourself yet"
        );
    }
}
