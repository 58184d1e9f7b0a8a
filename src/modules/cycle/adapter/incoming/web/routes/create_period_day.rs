use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::cycle::application::use_cases::create_period_day::{
    CreatePeriodDayError, CreatePeriodDayRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePeriodDayDto {
    /// Calendar date; only one entry may exist per date
    #[schema(example = "2025-06-01")]
    pub date: NaiveDate,

    /// "light", "medium" or "heavy"; omit for a flow-free entry
    #[schema(example = "medium")]
    pub flow: Option<String>,

    #[serde(default)]
    pub symptom_ids: Vec<Uuid>,

    pub user_id: Uuid,

    pub notes: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePeriodDayResponse {
    #[schema(example = "Period day created successfully")]
    message: String,

    /// Created entry's id, always a plain string
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,
}

/// Log a period day
#[utoipa::path(
    post,
    path = "/api/period-days",
    tag = "cycle",
    request_body = CreatePeriodDayDto,
    responses(
        (
            status = 201,
            description = "Period day created",
            body = inline(SuccessResponse<CreatePeriodDayResponse>)
        ),
        (
            status = 400,
            description = "Validation failure",
            body = ErrorResponse
        ),
        (
            status = 409,
            description = "An entry for this date already exists",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "DATE_ALREADY_LOGGED",
                    "message": "A period day for this date already exists"
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
#[post("/api/period-days")]
pub async fn create_period_day_handler(
    req: web::Json<CreatePeriodDayDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match CreatePeriodDayRequest::new(
        dto.date,
        dto.flow.as_deref(),
        dto.symptom_ids,
        dto.user_id,
        dto.notes,
    ) {
        Ok(request) => request,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    info!(date = %request.date(), "Creating period day");

    match data.create_period_day_use_case.execute(request).await {
        Ok(day) => ApiResponse::created(CreatePeriodDayResponse {
            message: "Period day created successfully".to_string(),
            id: day.id.to_string(),
        }),

        Err(CreatePeriodDayError::DateAlreadyLogged) => {
            warn!("Period day rejected: duplicate date");
            ApiResponse::conflict(
                "DATE_ALREADY_LOGGED",
                "A period day for this date already exists",
            )
        }

        Err(CreatePeriodDayError::RepositoryError(ref e)) => {
            error!(error = %e, "Period day insert failed");
            ApiResponse::internal_error()
        }
    }
}
