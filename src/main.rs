pub mod modules;
pub use modules::auth;
pub use modules::cycle;
pub use modules::prediction;
pub mod api;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::google_oauth::GoogleOAuthClient;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::{Argon2Hasher, BcryptHasher};
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::PasswordHasher;
use crate::auth::application::use_cases::{
    fetch_user::{FetchUserUseCase, IFetchUserUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    oauth_sign_in::{IOAuthSignInUseCase, OAuthSignInUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
};

use crate::cycle::adapter::outgoing::{
    CycleRecordQueryPostgres, PeriodDayRepositoryPostgres, PeriodRepositoryPostgres,
    SymptomLogRepositoryPostgres, SymptomQueryPostgres,
};
use crate::cycle::application::use_cases::{
    create_period_day::{CreatePeriodDayUseCase, ICreatePeriodDayUseCase},
    fetch_cycle_data::{FetchCycleDataUseCase, IFetchCycleDataUseCase},
    fetch_cycle_overviews::{FetchCycleOverviewsUseCase, IFetchCycleOverviewsUseCase},
    fetch_period_days::{FetchPeriodDaysUseCase, IFetchPeriodDaysUseCase},
    fetch_symptoms::{FetchSymptomsUseCase, IFetchSymptomsUseCase},
    seed_demo_data::{ISeedDemoDataUseCase, SeedDemoDataUseCase},
    sync_cycle_data::{ISyncCycleDataUseCase, SyncCycleDataUseCase},
};

use crate::prediction::adapter::outgoing::PeriodDatesPostgres;
use crate::prediction::application::use_cases::get_prediction::{
    GetPredictionUseCase, IGetPredictionUseCase,
};

use crate::api::openapi::ApiDoc;
use crate::shared::api::json_config::custom_json_config;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub fetch_user_use_case: Arc<dyn IFetchUserUseCase + Send + Sync>,
    pub oauth_sign_in_use_case: Arc<dyn IOAuthSignInUseCase + Send + Sync>,
    pub create_period_day_use_case: Arc<dyn ICreatePeriodDayUseCase + Send + Sync>,
    pub fetch_period_days_use_case: Arc<dyn IFetchPeriodDaysUseCase + Send + Sync>,
    pub fetch_symptoms_use_case: Arc<dyn IFetchSymptomsUseCase + Send + Sync>,
    pub fetch_cycle_data_use_case: Arc<dyn IFetchCycleDataUseCase + Send + Sync>,
    pub fetch_cycle_overviews_use_case: Arc<dyn IFetchCycleOverviewsUseCase + Send + Sync>,
    pub seed_demo_data_use_case: Arc<dyn ISeedDemoDataUseCase + Send + Sync>,
    pub sync_cycle_data_use_case: Arc<dyn ISyncCycleDataUseCase + Send + Sync>,
    pub get_prediction_use_case: Arc<dyn IGetPredictionUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider: Arc<dyn TokenProvider> = Arc::new(jwt_service.clone());

    // Bcrypt is the default; PASSWORD_HASHER=argon2 switches per deployment
    let password_hasher: Arc<dyn PasswordHasher> = match env::var("PASSWORD_HASHER").as_deref() {
        Ok("argon2") => Arc::new(Argon2Hasher::from_env()),
        _ => Arc::new(BcryptHasher),
    };

    // Auth
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let oauth_client = GoogleOAuthClient::from_env();

    let register_user_use_case = RegisterUserUseCase::new(
        user_repo.clone(),
        Arc::clone(&password_hasher),
        Arc::clone(&token_provider),
    );
    let login_user_use_case = LoginUserUseCase::new(
        user_query.clone(),
        Arc::clone(&password_hasher),
        Arc::clone(&token_provider),
    );
    let fetch_user_use_case = FetchUserUseCase::new(user_query.clone());
    let oauth_sign_in_use_case = OAuthSignInUseCase::new(
        user_query,
        user_repo,
        Arc::new(oauth_client),
        Arc::clone(&token_provider),
    );

    // Cycle
    let period_repo = PeriodRepositoryPostgres::new(Arc::clone(&db_arc));
    let period_day_repo = PeriodDayRepositoryPostgres::new(Arc::clone(&db_arc));
    let symptom_query = SymptomQueryPostgres::new(Arc::clone(&db_arc));
    let symptom_log_repo = SymptomLogRepositoryPostgres::new(Arc::clone(&db_arc));
    let cycle_record_query = CycleRecordQueryPostgres::new(Arc::clone(&db_arc));

    let create_period_day_use_case = CreatePeriodDayUseCase::new(period_day_repo.clone());
    let fetch_period_days_use_case = FetchPeriodDaysUseCase::new(period_day_repo.clone());
    let fetch_symptoms_use_case = FetchSymptomsUseCase::new(symptom_query);
    let fetch_cycle_data_use_case =
        FetchCycleDataUseCase::new(period_repo.clone(), symptom_log_repo.clone());
    let fetch_cycle_overviews_use_case = FetchCycleOverviewsUseCase::new(cycle_record_query);
    let seed_demo_data_use_case = SeedDemoDataUseCase::new(period_repo, symptom_log_repo);
    let sync_cycle_data_use_case = SyncCycleDataUseCase::new(period_day_repo);

    // Prediction
    let period_dates_query = PeriodDatesPostgres::new(Arc::clone(&db_arc));
    let get_prediction_use_case = GetPredictionUseCase::new(period_dates_query);

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        fetch_user_use_case: Arc::new(fetch_user_use_case),
        oauth_sign_in_use_case: Arc::new(oauth_sign_in_use_case),
        create_period_day_use_case: Arc::new(create_period_day_use_case),
        fetch_period_days_use_case: Arc::new(fetch_period_days_use_case),
        fetch_symptoms_use_case: Arc::new(fetch_symptoms_use_case),
        fetch_cycle_data_use_case: Arc::new(fetch_cycle_data_use_case),
        fetch_cycle_overviews_use_case: Arc::new(fetch_cycle_overviews_use_case),
        seed_demo_data_use_case: Arc::new(seed_demo_data_use_case),
        sync_cycle_data_use_case: Arc::new(sync_cycle_data_use_case),
        get_prediction_use_case: Arc::new(get_prediction_use_case),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::oauth_callback_handler);
    // Cycle
    cfg.service(crate::cycle::adapter::incoming::web::routes::create_period_day_handler);
    cfg.service(crate::cycle::adapter::incoming::web::routes::get_period_days_handler);
    cfg.service(crate::cycle::adapter::incoming::web::routes::get_symptoms_handler);
    cfg.service(crate::cycle::adapter::incoming::web::routes::get_cycle_data_handler);
    cfg.service(crate::cycle::adapter::incoming::web::routes::get_cycle_overviews_handler);
    cfg.service(crate::cycle::adapter::incoming::web::routes::sync_cycle_data_handler);
    cfg.service(crate::cycle::adapter::incoming::web::routes::seed_handler);
    // Prediction
    cfg.service(crate::prediction::adapter::incoming::web::routes::get_prediction_handler);
    // API docs
    cfg.service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
