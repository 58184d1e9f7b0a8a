use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::fetch_user::FetchUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    /// User ID, always a plain string
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    #[schema(example = "jane@example.com")]
    email: String,

    #[schema(example = "Jane")]
    first_name: String,

    #[schema(example = "Doe")]
    last_name: String,

    date_of_birth: Option<chrono::NaiveDate>,
    phone: Option<String>,
    bio: Option<String>,
    avatar: Option<String>,

    #[schema(example = false)]
    is_email_verified: bool,

    #[schema(example = false)]
    two_factor_enabled: bool,

    #[schema(example = false)]
    biometric_enabled: bool,
}

/// Fetch a user profile
///
/// The password hash never leaves the application layer.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "auth",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (
            status = 200,
            description = "User profile",
            body = inline(SuccessResponse<UserProfileResponse>)
        ),
        (
            status = 404,
            description = "User not found",
            body = ErrorResponse
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        ),
    )
)]
#[get("/api/users/{id}")]
pub async fn get_user_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();
    let use_case = &data.fetch_user_use_case;

    match use_case.execute(user_id).await {
        Ok(user) => {
            info!(user_id = %user.id, "User profile fetched");
            ApiResponse::success(UserProfileResponse {
                id: user.id.to_string(),
                email: user.email,
                first_name: user.first_name,
                last_name: user.last_name,
                date_of_birth: user.date_of_birth,
                phone: user.phone,
                bio: user.bio,
                avatar: user.avatar,
                is_email_verified: user.is_email_verified,
                two_factor_enabled: user.two_factor_enabled,
                biometric_enabled: user.biometric_enabled,
            })
        }

        Err(FetchUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(FetchUserError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::use_cases::fetch_user::IFetchUserUseCase;
    use crate::modules::auth::domain::entities::User;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockFetchFound {
        user: User,
    }

    #[async_trait]
    impl IFetchUserUseCase for MockFetchFound {
        async fn execute(&self, _user_id: Uuid) -> Result<User, FetchUserError> {
            Ok(self.user.clone())
        }
    }

    struct MockFetchMissing;

    #[async_trait]
    impl IFetchUserUseCase for MockFetchMissing {
        async fn execute(&self, _user_id: Uuid) -> Result<User, FetchUserError> {
            Err(FetchUserError::UserNotFound)
        }
    }

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "jane@example.com".to_string(),
            password_hash: Some("$2b$12$secret".to_string()),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
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

    #[actix_web::test]
    async fn profile_omits_password_hash() {
        let user = sample_user();
        let user_id = user.id;
        let state = TestAppStateBuilder::new()
            .with_fetch_user_use_case(std::sync::Arc::new(MockFetchFound { user }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(get_user_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/users/{user_id}"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], user_id.to_string());
        assert_eq!(body["data"]["email"], "jane@example.com");
        assert!(body["data"].get("passwordHash").is_none());
        assert!(body["data"].get("password_hash").is_none());
    }

    #[actix_web::test]
    async fn missing_user_is_404() {
        let state = TestAppStateBuilder::new()
            .with_fetch_user_use_case(std::sync::Arc::new(MockFetchMissing))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(get_user_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/users/{}", Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
