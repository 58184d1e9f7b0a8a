use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::cycle::application::ports::outgoing::CycleRecordWithUser;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::error;

use super::get_symptoms::SymptomUserDto;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CycleOverviewDto {
    pub id: String,
    pub user: Option<SymptomUserDto>,
    pub period_day_ids: Vec<String>,
    pub symptoms: SymptomSummaryDto,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SymptomSummaryDto {
    #[schema(example = "2025-06-01")]
    pub date: NaiveDate,
    #[serde(rename = "type")]
    #[schema(example = "cramps")]
    pub symptom_type: String,
    #[schema(example = 7)]
    pub intensity: i32,
    pub notes: Option<String>,
}

impl From<CycleRecordWithUser> for CycleOverviewDto {
    fn from(row: CycleRecordWithUser) -> Self {
        CycleOverviewDto {
            id: row.record.id.to_string(),
            user: row.user.map(SymptomUserDto::from),
            period_day_ids: row
                .record
                .period_day_ids
                .iter()
                .map(|id| id.to_string())
                .collect(),
            symptoms: SymptomSummaryDto {
                date: row.record.symptom_summary.date,
                symptom_type: row.record.symptom_summary.symptom_type,
                intensity: row.record.symptom_summary.intensity,
                notes: row.record.symptom_summary.notes,
            },
        }
    }
}

/// List all cycle records with their user populated
#[utoipa::path(
    get,
    path = "/api/cycle-data",
    tag = "cycle",
    responses(
        (
            status = 200,
            description = "All cycle records",
            body = inline(SuccessResponse<Vec<CycleOverviewDto>>)
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        ),
    )
)]
#[get("/api/cycle-data")]
pub async fn get_cycle_overviews_handler(data: web::Data<AppState>) -> impl Responder {
    match data.fetch_cycle_overviews_use_case.execute().await {
        Ok(rows) => {
            let dtos: Vec<CycleOverviewDto> =
                rows.into_iter().map(CycleOverviewDto::from).collect();
            ApiResponse::success(dtos)
        }
        Err(e) => {
            error!(error = %e, "Cycle record listing failed");
            ApiResponse::internal_error()
        }
    }
}
