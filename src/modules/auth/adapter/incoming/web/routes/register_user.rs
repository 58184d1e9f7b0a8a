use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::register_user::{
    RegisterUserError, RegisterUserRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, info, warn};

use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    /// "{firstName} {lastName} has been registered successfully"
    #[schema(example = "Jane Doe has been registered successfully")]
    message: String,

    /// New user's ID, always a plain string
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    user_id: String,

    #[schema(example = "jane@example.com")]
    email: String,
}

/// Schema-only mirror of the validated registration payload.
#[derive(serde::Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct RegisterRequestDto {
    #[schema(example = "jane@example.com")]
    email: String,
    #[schema(example = "SecurePass123!")]
    password: String,
    #[schema(example = "Jane")]
    first_name: String,
    #[schema(example = "Doe")]
    last_name: String,
    date_of_birth: Option<chrono::NaiveDate>,
    phone: Option<String>,
    bio: Option<String>,
    avatar: Option<String>,
}

/// Register a new account
///
/// Hashes the password, inserts the user, and sets the session cookie.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterRequestDto,
    responses(
        (
            status = 201,
            description = "Account created, session cookie set",
            body = inline(SuccessResponse<RegisterResponse>)
        ),
        (
            status = 400,
            description = "Validation failure",
            body = ErrorResponse
        ),
        (
            status = 409,
            description = "Email already registered",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "EMAIL_ALREADY_REGISTERED",
                    "message": "An account with this email already exists"
                }
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        ),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.register_user_use_case;
    let request = req.into_inner();

    info!(email = %request.email(), "Registration attempt");

    match use_case.execute(request).await {
        Ok(response) => {
            info!(user_id = %response.user_id, "User registered successfully");

            let cookie = Cookie::build("token", response.session_token.clone())
                .same_site(SameSite::Strict)
                .http_only(true)
                .path("/")
                .finish();

            let body = ApiResponse::<RegisterResponse> {
                success: true,
                data: Some(RegisterResponse {
                    message: response.message,
                    user_id: response.user_id.to_string(),
                    email: response.email,
                }),
                error: None,
            };

            HttpResponse::Created().cookie(cookie).json(body)
        }

        Err(RegisterUserError::EmailAlreadyRegistered) => {
            warn!("Registration failed: duplicate email");
            ApiResponse::conflict(
                "EMAIL_ALREADY_REGISTERED",
                "An account with this email already exists",
            )
        }

        Err(RegisterUserError::HashingFailed(ref e)) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }

        Err(RegisterUserError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(RegisterUserError::RepositoryError(ref e)) => {
            error!(error = %e, "Database insert failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::use_cases::register_user::{
        IRegisterUserUseCase, RegisterUserResponse as UseCaseResponse,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    struct MockRegisterSuccess;

    #[async_trait]
    impl IRegisterUserUseCase for MockRegisterSuccess {
        async fn execute(
            &self,
            request: RegisterUserRequest,
        ) -> Result<UseCaseResponse, RegisterUserError> {
            Ok(UseCaseResponse {
                message: format!(
                    "{} {} has been registered successfully",
                    request.first_name(),
                    request.last_name()
                ),
                session_token: "signed.session.token".to_string(),
                user_id: Uuid::new_v4(),
                email: request.email().to_string(),
            })
        }
    }

    struct MockRegisterDuplicate;

    #[async_trait]
    impl IRegisterUserUseCase for MockRegisterDuplicate {
        async fn execute(
            &self,
            _request: RegisterUserRequest,
        ) -> Result<UseCaseResponse, RegisterUserError> {
            Err(RegisterUserError::EmailAlreadyRegistered)
        }
    }

    #[actix_web::test]
    async fn register_success_returns_greeting_and_cookie() {
        let state = TestAppStateBuilder::new()
            .with_register_use_case(std::sync::Arc::new(MockRegisterSuccess))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(register_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "email": "jane@example.com",
                "password": "SecurePass123!",
                "firstName": "Jane",
                "lastName": "Doe"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);

        let set_cookie = resp
            .headers()
            .get("set-cookie")
            .expect("session cookie should be set")
            .to_str()
            .unwrap();
        assert!(set_cookie.contains("HttpOnly"));

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["data"]["message"],
            "Jane Doe has been registered successfully"
        );
        // Id must serialize as a plain string
        assert!(body["data"]["userId"].is_string());
    }

    #[actix_web::test]
    async fn register_duplicate_email_is_conflict() {
        let state = TestAppStateBuilder::new()
            .with_register_use_case(std::sync::Arc::new(MockRegisterDuplicate))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(register_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "email": "jane@example.com",
                "password": "SecurePass123!",
                "firstName": "Jane",
                "lastName": "Doe"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn register_short_password_is_rejected_before_use_case() {
        let state = TestAppStateBuilder::new().build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(register_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "email": "jane@example.com",
                "password": "short",
                "firstName": "Jane",
                "lastName": "Doe"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
