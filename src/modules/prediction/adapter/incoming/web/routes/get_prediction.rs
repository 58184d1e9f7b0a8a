use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::prediction::application::use_cases::get_prediction::PredictionReport;
use crate::modules::prediction::domain::engine::DateRange;
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
pub struct DateRangeDto {
    #[schema(example = "2025-06-10")]
    pub start: NaiveDate,
    #[schema(example = "2025-06-16")]
    pub end: NaiveDate,
}

impl From<DateRange> for DateRangeDto {
    fn from(range: DateRange) -> Self {
        DateRangeDto {
            start: range.start,
            end: range.end,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CycleStatsDto {
    #[schema(example = json!([28, 29]))]
    pub cycle_lengths: Vec<i64>,
    #[schema(example = 28.5)]
    pub average_cycle_length: Option<f64>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    #[schema(example = "2025-06-01")]
    pub last_period: Option<NaiveDate>,
    #[schema(example = "2025-06-29")]
    pub next_period_start: NaiveDate,
    #[schema(example = "2025-06-15")]
    pub ovulation_day: NaiveDate,
    pub fertile_window: DateRangeDto,
    pub pms_window: DateRangeDto,
    #[schema(example = 19)]
    pub days_until_next_period: i64,
    pub upcoming_periods: Vec<DateRangeDto>,
    pub cycle_stats: CycleStatsDto,
}

impl From<PredictionReport> for PredictionResponse {
    fn from(report: PredictionReport) -> Self {
        PredictionResponse {
            last_period: report.prediction.last_period,
            next_period_start: report.prediction.next_period_start,
            ovulation_day: report.prediction.ovulation_day,
            fertile_window: report.prediction.fertile_window.into(),
            pms_window: report.prediction.pms_window.into(),
            days_until_next_period: report.prediction.days_until_next_period,
            upcoming_periods: report
                .upcoming_periods
                .into_iter()
                .map(DateRangeDto::from)
                .collect(),
            cycle_stats: CycleStatsDto {
                cycle_lengths: report.stats.cycle_lengths,
                average_cycle_length: report.stats.average_cycle_length,
            },
        }
    }
}

/// Predict the user's next cycle
///
/// Runs the engine over the user's logged period dates with the default
/// cycle parameters.
#[utoipa::path(
    get,
    path = "/api/predictions/{user_id}",
    tag = "prediction",
    params(
        ("user_id" = Uuid, Path, description = "User whose history drives the prediction")
    ),
    responses(
        (
            status = 200,
            description = "Structured prediction, all dates ISO-8601",
            body = inline(SuccessResponse<PredictionResponse>)
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        ),
    )
)]
#[get("/api/predictions/{user_id}")]
pub async fn get_prediction_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.get_prediction_use_case.execute(user_id).await {
        Ok(report) => ApiResponse::success(PredictionResponse::from(report)),
        Err(e) => {
            error!(user_id = %user_id, error = %e, "Prediction failed");
            ApiResponse::internal_error()
        }
    }
}
