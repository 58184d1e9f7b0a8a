use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::modules::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, LoginUserInfo, RegisterRequestDto, RegisterResponse,
    UserProfileResponse,
};

// Cycle
use crate::modules::cycle::adapter::incoming::web::routes::{
    CreatePeriodDayDto, CreatePeriodDayResponse, CycleDataResponse, CycleOverviewDto,
    EntrySnapshotDto, LocalEntryDto, PeriodDayDto, PeriodDto, SeedResponse, SymptomDto,
    SymptomLogDto, SymptomSummaryDto, SymptomUserDto, SyncOutcomeDto, SyncRequestDto,
};

// Prediction
use crate::modules::prediction::adapter::incoming::web::routes::{
    CycleStatsDto, DateRangeDto, PredictionResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cyclewise API",
        version = "1.0.0",
        description = "Menstrual cycle tracking backend: auth, cycle logging and predictions",
    ),
    paths(
        // Auth endpoints
        crate::modules::auth::adapter::incoming::web::routes::register_user_handler,
        crate::modules::auth::adapter::incoming::web::routes::login_user_handler,
        crate::modules::auth::adapter::incoming::web::routes::get_user_handler,
        crate::modules::auth::adapter::incoming::web::routes::oauth_callback_handler,

        // Cycle endpoints
        crate::modules::cycle::adapter::incoming::web::routes::create_period_day_handler,
        crate::modules::cycle::adapter::incoming::web::routes::get_period_days_handler,
        crate::modules::cycle::adapter::incoming::web::routes::get_symptoms_handler,
        crate::modules::cycle::adapter::incoming::web::routes::get_cycle_data_handler,
        crate::modules::cycle::adapter::incoming::web::routes::get_cycle_overviews_handler,
        crate::modules::cycle::adapter::incoming::web::routes::sync_cycle_data_handler,
        crate::modules::cycle::adapter::incoming::web::routes::seed_handler,

        // Prediction endpoints
        crate::modules::prediction::adapter::incoming::web::routes::get_prediction_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            RegisterRequestDto,
            RegisterResponse,
            LoginRequestDto,
            LoginResponse,
            LoginUserInfo,
            UserProfileResponse,

            // Cycle DTOs
            CreatePeriodDayDto,
            CreatePeriodDayResponse,
            PeriodDayDto,
            SymptomDto,
            SymptomUserDto,
            PeriodDto,
            SymptomLogDto,
            CycleDataResponse,
            CycleOverviewDto,
            SymptomSummaryDto,
            SyncRequestDto,
            LocalEntryDto,
            EntrySnapshotDto,
            SyncOutcomeDto,
            SeedResponse,

            // Prediction DTOs
            PredictionResponse,
            DateRangeDto,
            CycleStatsDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and OAuth"),
        (name = "cycle", description = "Period, symptom and cycle data endpoints"),
        (name = "prediction", description = "Cycle prediction endpoints"),
        (name = "dev", description = "Development helpers"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    "token",
                    "Session token set by the login and OAuth flows",
                ))),
            )
        }
    }
}
