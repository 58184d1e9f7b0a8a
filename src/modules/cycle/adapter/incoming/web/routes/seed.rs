use crate::api::schemas::SuccessResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, info};

use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct SeedResponse {
    #[schema(example = "Seeding completed successfully")]
    message: String,
}

/// Load the demo dataset
///
/// Dev-only. Inserts the fixture periods and symptom logs for the demo
/// user; calling it twice duplicates the rows.
#[utoipa::path(
    get,
    path = "/api/seed",
    tag = "dev",
    responses(
        (
            status = 200,
            description = "Fixtures inserted",
            body = inline(SuccessResponse<SeedResponse>)
        ),
        (status = 500, description = "Seeding failed"),
    )
)]
#[get("/api/seed")]
pub async fn seed_handler(data: web::Data<AppState>) -> impl Responder {
    match data.seed_demo_data_use_case.execute().await {
        Ok(report) => {
            info!(
                periods = report.periods_inserted,
                symptom_logs = report.symptom_logs_inserted,
                "Demo data seeded"
            );
            ApiResponse::success(SeedResponse {
                message: "Seeding completed successfully".to_string(),
            })
        }
        Err(e) => {
            error!(error = %e, "Seeding failed");
            // The underlying error has always been part of this route's
            // 500 body
            HttpResponse::InternalServerError().json(serde_json::json!({
                "message": format!("Seeding failed => {e}")
            }))
        }
    }
}
