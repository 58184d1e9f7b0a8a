use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::error;

use crate::modules::cycle::domain::entities::PeriodDay;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PeriodDayDto {
    /// Entry id, always a plain string
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    #[schema(example = "2025-06-01")]
    pub date: NaiveDate,

    #[schema(example = "medium")]
    pub flow: Option<String>,

    pub symptom_ids: Vec<String>,

    pub user_id: String,

    pub notes: String,

    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<PeriodDay> for PeriodDayDto {
    fn from(day: PeriodDay) -> Self {
        PeriodDayDto {
            id: day.id.to_string(),
            date: day.date,
            flow: day.flow.map(|f| f.to_string()),
            symptom_ids: day.symptom_ids.iter().map(|id| id.to_string()).collect(),
            user_id: day.user_id.to_string(),
            notes: day.notes,
            updated_at: day.updated_at,
        }
    }
}

/// List all period days
#[utoipa::path(
    get,
    path = "/api/period-days",
    tag = "cycle",
    responses(
        (
            status = 200,
            description = "All logged period days, oldest first",
            body = inline(SuccessResponse<Vec<PeriodDayDto>>)
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        ),
    )
)]
#[get("/api/period-days")]
pub async fn get_period_days_handler(data: web::Data<AppState>) -> impl Responder {
    match data.fetch_period_days_use_case.execute().await {
        Ok(days) => {
            let dtos: Vec<PeriodDayDto> = days.into_iter().map(PeriodDayDto::from).collect();
            ApiResponse::success(dtos)
        }
        Err(e) => {
            error!(error = %e, "Period day listing failed");
            ApiResponse::internal_error()
        }
    }
}
