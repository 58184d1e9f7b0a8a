//! Builds an `AppState` for handler tests. Every use case defaults to a
//! stub that fails, so each test only wires the mock it actually cares
//! about. Handlers that never reach a use case (validation rejects, auth
//! rejects) can use `build()` as is.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::use_cases::fetch_user::{
    FetchUserError, IFetchUserUseCase,
};
use crate::modules::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::modules::auth::application::use_cases::oauth_sign_in::{
    IOAuthSignInUseCase, OAuthSignInError, OAuthSignInResponse,
};
use crate::modules::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserError, RegisterUserRequest, RegisterUserResponse,
};
use crate::modules::auth::domain::entities::User;

use crate::modules::cycle::application::ports::outgoing::{
    CycleRecordWithUser, SymptomWithUser,
};
use crate::modules::cycle::application::use_cases::create_period_day::{
    CreatePeriodDayError, CreatePeriodDayRequest, ICreatePeriodDayUseCase,
};
use crate::modules::cycle::application::use_cases::fetch_cycle_data::{
    CycleDataBundle, FetchCycleDataError, IFetchCycleDataUseCase,
};
use crate::modules::cycle::application::use_cases::fetch_cycle_overviews::{
    FetchCycleOverviewsError, IFetchCycleOverviewsUseCase,
};
use crate::modules::cycle::application::use_cases::fetch_period_days::{
    FetchPeriodDaysError, IFetchPeriodDaysUseCase,
};
use crate::modules::cycle::application::use_cases::fetch_symptoms::{
    FetchSymptomsError, IFetchSymptomsUseCase,
};
use crate::modules::cycle::application::use_cases::seed_demo_data::{
    ISeedDemoDataUseCase, SeedError, SeedReport,
};
use crate::modules::cycle::application::use_cases::sync_cycle_data::{
    ISyncCycleDataUseCase, SyncCycleDataError,
};
use crate::modules::cycle::domain::entities::PeriodDay;
use crate::modules::cycle::domain::reconcile::{LocalEntry, Reconciliation};

use crate::modules::prediction::application::use_cases::get_prediction::{
    GetPredictionError, IGetPredictionUseCase, PredictionReport,
};

use crate::AppState;

struct UnconfiguredRegisterUser;

#[async_trait]
impl IRegisterUserUseCase for UnconfiguredRegisterUser {
    async fn execute(
        &self,
        _request: RegisterUserRequest,
    ) -> Result<RegisterUserResponse, RegisterUserError> {
        Err(RegisterUserError::RepositoryError(
            "no register_user mock configured".to_string(),
        ))
    }
}

struct UnconfiguredLoginUser;

#[async_trait]
impl ILoginUserUseCase for UnconfiguredLoginUser {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        Err(LoginError::QueryError(
            "no login_user mock configured".to_string(),
        ))
    }
}

struct UnconfiguredFetchUser;

#[async_trait]
impl IFetchUserUseCase for UnconfiguredFetchUser {
    async fn execute(&self, _user_id: Uuid) -> Result<User, FetchUserError> {
        Err(FetchUserError::QueryError(
            "no fetch_user mock configured".to_string(),
        ))
    }
}

struct UnconfiguredOAuthSignIn;

#[async_trait]
impl IOAuthSignInUseCase for UnconfiguredOAuthSignIn {
    async fn execute(&self, _code: &str) -> Result<OAuthSignInResponse, OAuthSignInError> {
        Err(OAuthSignInError::ExchangeFailed(
            "no oauth_sign_in mock configured".to_string(),
        ))
    }
}

struct UnconfiguredCreatePeriodDay;

#[async_trait]
impl ICreatePeriodDayUseCase for UnconfiguredCreatePeriodDay {
    async fn execute(
        &self,
        _request: CreatePeriodDayRequest,
    ) -> Result<PeriodDay, CreatePeriodDayError> {
        Err(CreatePeriodDayError::RepositoryError(
            "no create_period_day mock configured".to_string(),
        ))
    }
}

struct UnconfiguredFetchPeriodDays;

#[async_trait]
impl IFetchPeriodDaysUseCase for UnconfiguredFetchPeriodDays {
    async fn execute(&self) -> Result<Vec<PeriodDay>, FetchPeriodDaysError> {
        Err(FetchPeriodDaysError::QueryError(
            "no fetch_period_days mock configured".to_string(),
        ))
    }
}

struct UnconfiguredFetchSymptoms;

#[async_trait]
impl IFetchSymptomsUseCase for UnconfiguredFetchSymptoms {
    async fn execute(&self) -> Result<Vec<SymptomWithUser>, FetchSymptomsError> {
        Err(FetchSymptomsError::QueryError(
            "no fetch_symptoms mock configured".to_string(),
        ))
    }
}

struct UnconfiguredFetchCycleData;

#[async_trait]
impl IFetchCycleDataUseCase for UnconfiguredFetchCycleData {
    async fn execute(&self, _user_id: Uuid) -> Result<CycleDataBundle, FetchCycleDataError> {
        Err(FetchCycleDataError::FetchFailed)
    }
}

struct UnconfiguredFetchCycleOverviews;

#[async_trait]
impl IFetchCycleOverviewsUseCase for UnconfiguredFetchCycleOverviews {
    async fn execute(&self) -> Result<Vec<CycleRecordWithUser>, FetchCycleOverviewsError> {
        Err(FetchCycleOverviewsError::QueryError(
            "no fetch_cycle_overviews mock configured".to_string(),
        ))
    }
}

struct UnconfiguredSeedDemoData;

#[async_trait]
impl ISeedDemoDataUseCase for UnconfiguredSeedDemoData {
    async fn execute(&self) -> Result<SeedReport, SeedError> {
        Err(SeedError("no seed_demo_data mock configured".to_string()))
    }
}

struct UnconfiguredSyncCycleData;

#[async_trait]
impl ISyncCycleDataUseCase for UnconfiguredSyncCycleData {
    async fn execute(
        &self,
        _user_id: Uuid,
        _entries: Vec<LocalEntry>,
    ) -> Result<Vec<Reconciliation>, SyncCycleDataError> {
        Err(SyncCycleDataError::RepositoryError(
            "no sync_cycle_data mock configured".to_string(),
        ))
    }
}

struct UnconfiguredGetPrediction;

#[async_trait]
impl IGetPredictionUseCase for UnconfiguredGetPrediction {
    async fn execute(&self, _user_id: Uuid) -> Result<PredictionReport, GetPredictionError> {
        Err(GetPredictionError::QueryError(
            "no get_prediction mock configured".to_string(),
        ))
    }
}

pub struct TestAppStateBuilder {
    register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    fetch_user_use_case: Arc<dyn IFetchUserUseCase + Send + Sync>,
    oauth_sign_in_use_case: Arc<dyn IOAuthSignInUseCase + Send + Sync>,
    create_period_day_use_case: Arc<dyn ICreatePeriodDayUseCase + Send + Sync>,
    fetch_period_days_use_case: Arc<dyn IFetchPeriodDaysUseCase + Send + Sync>,
    fetch_symptoms_use_case: Arc<dyn IFetchSymptomsUseCase + Send + Sync>,
    fetch_cycle_data_use_case: Arc<dyn IFetchCycleDataUseCase + Send + Sync>,
    fetch_cycle_overviews_use_case: Arc<dyn IFetchCycleOverviewsUseCase + Send + Sync>,
    seed_demo_data_use_case: Arc<dyn ISeedDemoDataUseCase + Send + Sync>,
    sync_cycle_data_use_case: Arc<dyn ISyncCycleDataUseCase + Send + Sync>,
    get_prediction_use_case: Arc<dyn IGetPredictionUseCase + Send + Sync>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            register_user_use_case: Arc::new(UnconfiguredRegisterUser),
            login_user_use_case: Arc::new(UnconfiguredLoginUser),
            fetch_user_use_case: Arc::new(UnconfiguredFetchUser),
            oauth_sign_in_use_case: Arc::new(UnconfiguredOAuthSignIn),
            create_period_day_use_case: Arc::new(UnconfiguredCreatePeriodDay),
            fetch_period_days_use_case: Arc::new(UnconfiguredFetchPeriodDays),
            fetch_symptoms_use_case: Arc::new(UnconfiguredFetchSymptoms),
            fetch_cycle_data_use_case: Arc::new(UnconfiguredFetchCycleData),
            fetch_cycle_overviews_use_case: Arc::new(UnconfiguredFetchCycleOverviews),
            seed_demo_data_use_case: Arc::new(UnconfiguredSeedDemoData),
            sync_cycle_data_use_case: Arc::new(UnconfiguredSyncCycleData),
            get_prediction_use_case: Arc::new(UnconfiguredGetPrediction),
        }
    }

    pub fn with_register_use_case(
        mut self,
        use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    ) -> Self {
        self.register_user_use_case = use_case;
        self
    }

    pub fn with_login_use_case(
        mut self,
        use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    ) -> Self {
        self.login_user_use_case = use_case;
        self
    }

    pub fn with_fetch_user_use_case(
        mut self,
        use_case: Arc<dyn IFetchUserUseCase + Send + Sync>,
    ) -> Self {
        self.fetch_user_use_case = use_case;
        self
    }

    pub fn with_oauth_sign_in_use_case(
        mut self,
        use_case: Arc<dyn IOAuthSignInUseCase + Send + Sync>,
    ) -> Self {
        self.oauth_sign_in_use_case = use_case;
        self
    }

    pub fn with_create_period_day_use_case(
        mut self,
        use_case: Arc<dyn ICreatePeriodDayUseCase + Send + Sync>,
    ) -> Self {
        self.create_period_day_use_case = use_case;
        self
    }

    pub fn with_fetch_period_days_use_case(
        mut self,
        use_case: Arc<dyn IFetchPeriodDaysUseCase + Send + Sync>,
    ) -> Self {
        self.fetch_period_days_use_case = use_case;
        self
    }

    pub fn with_fetch_symptoms_use_case(
        mut self,
        use_case: Arc<dyn IFetchSymptomsUseCase + Send + Sync>,
    ) -> Self {
        self.fetch_symptoms_use_case = use_case;
        self
    }

    pub fn with_fetch_cycle_data_use_case(
        mut self,
        use_case: Arc<dyn IFetchCycleDataUseCase + Send + Sync>,
    ) -> Self {
        self.fetch_cycle_data_use_case = use_case;
        self
    }

    pub fn with_fetch_cycle_overviews_use_case(
        mut self,
        use_case: Arc<dyn IFetchCycleOverviewsUseCase + Send + Sync>,
    ) -> Self {
        self.fetch_cycle_overviews_use_case = use_case;
        self
    }

    pub fn with_seed_demo_data_use_case(
        mut self,
        use_case: Arc<dyn ISeedDemoDataUseCase + Send + Sync>,
    ) -> Self {
        self.seed_demo_data_use_case = use_case;
        self
    }

    pub fn with_sync_cycle_data_use_case(
        mut self,
        use_case: Arc<dyn ISyncCycleDataUseCase + Send + Sync>,
    ) -> Self {
        self.sync_cycle_data_use_case = use_case;
        self
    }

    pub fn with_get_prediction_use_case(
        mut self,
        use_case: Arc<dyn IGetPredictionUseCase + Send + Sync>,
    ) -> Self {
        self.get_prediction_use_case = use_case;
        self
    }

    pub fn build(self) -> AppState {
        AppState {
            register_user_use_case: self.register_user_use_case,
            login_user_use_case: self.login_user_use_case,
            fetch_user_use_case: self.fetch_user_use_case,
            oauth_sign_in_use_case: self.oauth_sign_in_use_case,
            create_period_day_use_case: self.create_period_day_use_case,
            fetch_period_days_use_case: self.fetch_period_days_use_case,
            fetch_symptoms_use_case: self.fetch_symptoms_use_case,
            fetch_cycle_data_use_case: self.fetch_cycle_data_use_case,
            fetch_cycle_overviews_use_case: self.fetch_cycle_overviews_use_case,
            seed_demo_data_use_case: self.seed_demo_data_use_case,
            sync_cycle_data_use_case: self.sync_cycle_data_use_case,
            get_prediction_use_case: self.get_prediction_use_case,
        }
    }
}
