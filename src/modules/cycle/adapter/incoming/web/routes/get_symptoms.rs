use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::domain::entities::User;
use crate::modules::cycle::application::ports::outgoing::SymptomWithUser;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::error;

use utoipa::ToSchema;

/// The populated owner of a symptom row.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SymptomUserDto {
    pub id: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "Jane")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
}

impl From<User> for SymptomUserDto {
    fn from(user: User) -> Self {
        SymptomUserDto {
            id: user.id.to_string(),
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SymptomDto {
    pub id: String,
    #[schema(example = "2025-06-01")]
    pub date: NaiveDate,
    #[schema(example = "pain")]
    pub category: String,
    #[serde(rename = "type")]
    #[schema(example = "cramps")]
    pub symptom_type: String,
    #[schema(example = 7)]
    pub intensity: i32,
    pub period_day_id: String,
    pub user: Option<SymptomUserDto>,
    pub notes: Option<String>,
}

impl From<SymptomWithUser> for SymptomDto {
    fn from(row: SymptomWithUser) -> Self {
        SymptomDto {
            id: row.symptom.id.to_string(),
            date: row.symptom.date,
            category: row.symptom.category,
            symptom_type: row.symptom.symptom_type,
            intensity: row.symptom.intensity,
            period_day_id: row.symptom.period_day_id.to_string(),
            user: row.user.map(SymptomUserDto::from),
            notes: row.symptom.notes,
        }
    }
}

/// List all dated symptoms with their user populated
#[utoipa::path(
    get,
    path = "/api/symptoms",
    tag = "cycle",
    responses(
        (
            status = 200,
            description = "All symptoms, oldest first",
            body = inline(SuccessResponse<Vec<SymptomDto>>)
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        ),
    )
)]
#[get("/api/symptoms")]
pub async fn get_symptoms_handler(data: web::Data<AppState>) -> impl Responder {
    match data.fetch_symptoms_use_case.execute().await {
        Ok(rows) => {
            let dtos: Vec<SymptomDto> = rows.into_iter().map(SymptomDto::from).collect();
            ApiResponse::success(dtos)
        }
        Err(e) => {
            error!(error = %e, "Symptom listing failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::cycle::application::use_cases::fetch_symptoms::{
        FetchSymptomsError, IFetchSymptomsUseCase,
    };
    use crate::modules::cycle::domain::entities::Symptom;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    struct MockFetchSymptoms {
        rows: Vec<SymptomWithUser>,
    }

    #[async_trait]
    impl IFetchSymptomsUseCase for MockFetchSymptoms {
        async fn execute(&self) -> Result<Vec<SymptomWithUser>, FetchSymptomsError> {
            Ok(self.rows.clone())
        }
    }

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "jane@example.com".to_string(),
            password_hash: None,
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
    async fn serializes_type_field_and_populated_user() {
        let user = sample_user();
        let row = SymptomWithUser {
            symptom: Symptom {
                id: Uuid::new_v4(),
                date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                category: "pain".to_string(),
                symptom_type: "cramps".to_string(),
                intensity: 7,
                period_day_id: Uuid::new_v4(),
                user_id: user.id,
                notes: None,
            },
            user: Some(user),
        };

        let state = TestAppStateBuilder::new()
            .with_fetch_symptoms_use_case(std::sync::Arc::new(MockFetchSymptoms {
                rows: vec![row],
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(get_symptoms_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/symptoms").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["type"], "cramps");
        assert_eq!(body["data"][0]["user"]["email"], "jane@example.com");
        assert!(body["data"][0]["user"].get("passwordHash").is_none());
    }
}
