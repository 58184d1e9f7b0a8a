use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::cycle::domain::entities::{Period, SymptomLog};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PeriodDto {
    pub id: String,
    pub user_id: String,
    #[schema(example = "2025-06-01")]
    pub date: NaiveDate,
    #[schema(example = "medium")]
    pub flow: String,
    #[schema(example = json!(["cramps", "bloating"]))]
    pub symptoms: Vec<String>,
    pub notes: Option<String>,
}

impl From<Period> for PeriodDto {
    fn from(period: Period) -> Self {
        PeriodDto {
            id: period.id.to_string(),
            user_id: period.user_id.to_string(),
            date: period.date,
            flow: period.flow.to_string(),
            symptoms: period.symptoms,
            notes: period.notes,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SymptomLogDto {
    pub id: String,
    pub user_id: String,
    #[schema(example = "2025-06-01")]
    pub date: NaiveDate,
    #[serde(rename = "type")]
    #[schema(example = "cramps")]
    pub symptom_type: String,
    #[schema(example = 7)]
    pub intensity: i32,
    pub notes: Option<String>,
}

impl From<SymptomLog> for SymptomLogDto {
    fn from(log: SymptomLog) -> Self {
        SymptomLogDto {
            id: log.id.to_string(),
            user_id: log.user_id.to_string(),
            date: log.date,
            symptom_type: log.symptom_type,
            intensity: log.intensity,
            notes: log.notes,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CycleDataResponse {
    pub periods: Vec<PeriodDto>,
    pub symptom_logs: Vec<SymptomLogDto>,
}

/// Fetch a user's cycle history
///
/// Period rows plus the flat symptom log, bundled for the dashboard.
#[utoipa::path(
    get,
    path = "/api/cycle-data/{user_id}",
    tag = "cycle",
    params(
        ("user_id" = Uuid, Path, description = "Owner of the cycle history")
    ),
    responses(
        (
            status = 200,
            description = "The user's cycle history",
            body = inline(SuccessResponse<CycleDataResponse>)
        ),
        (
            status = 500,
            description = "Lookup failed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "FETCH_FAILED",
                    "message": "Failed to fetch cycle data"
                }
            })
        ),
    )
)]
#[get("/api/cycle-data/{user_id}")]
pub async fn get_cycle_data_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.fetch_cycle_data_use_case.execute(user_id).await {
        Ok(bundle) => ApiResponse::success(CycleDataResponse {
            periods: bundle.periods.into_iter().map(PeriodDto::from).collect(),
            symptom_logs: bundle
                .symptom_logs
                .into_iter()
                .map(SymptomLogDto::from)
                .collect(),
        }),
        Err(e) => {
            error!(user_id = %user_id, "Cycle data lookup failed");
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "FETCH_FAILED",
                &e.to_string(),
            )
        }
    }
}
