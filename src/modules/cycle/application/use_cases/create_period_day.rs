use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::cycle::application::ports::outgoing::{
    NewPeriodDay, PeriodDayRepository, PeriodDayRepositoryError,
};
use crate::modules::cycle::domain::entities::{FlowIntensity, PeriodDay};

// ====================== Create Period Day Request ======================
/// Validated period-day entry. Flow, when present, must be an actual
/// bleeding intensity; "none" is only meaningful on period rows.
#[derive(Debug, Clone)]
pub struct CreatePeriodDayRequest {
    date: NaiveDate,
    flow: Option<FlowIntensity>,
    symptom_ids: Vec<Uuid>,
    user_id: Uuid,
    notes: String,
}

#[derive(Debug, Clone)]
pub enum CreatePeriodDayRequestError {
    InvalidFlow,
    NotesTooLong,
}

impl std::fmt::Display for CreatePeriodDayRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreatePeriodDayRequestError::InvalidFlow => {
                write!(f, "Flow must be one of light, medium, heavy")
            }
            CreatePeriodDayRequestError::NotesTooLong => {
                write!(f, "Notes cannot exceed 1000 characters")
            }
        }
    }
}

impl std::error::Error for CreatePeriodDayRequestError {}

impl CreatePeriodDayRequest {
    pub fn new(
        date: NaiveDate,
        flow: Option<&str>,
        symptom_ids: Vec<Uuid>,
        user_id: Uuid,
        notes: Option<String>,
    ) -> Result<Self, CreatePeriodDayRequestError> {
        let flow = match flow {
            None => None,
            Some(raw) => match FlowIntensity::parse(raw) {
                Some(FlowIntensity::None) | None => {
                    return Err(CreatePeriodDayRequestError::InvalidFlow);
                }
                parsed => parsed,
            },
        };

        let notes = notes.unwrap_or_default();
        if notes.len() > 1000 {
            return Err(CreatePeriodDayRequestError::NotesTooLong);
        }

        Ok(Self {
            date,
            flow,
            symptom_ids,
            user_id,
            notes,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

// =========================== Use Case Error ===========================
#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePeriodDayError {
    #[error("A period day for this date already exists")]
    DateAlreadyLogged,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ============================== Use Case ==============================
#[async_trait]
pub trait ICreatePeriodDayUseCase: Send + Sync {
    async fn execute(
        &self,
        request: CreatePeriodDayRequest,
    ) -> Result<PeriodDay, CreatePeriodDayError>;
}

#[derive(Clone)]
pub struct CreatePeriodDayUseCase<R>
where
    R: PeriodDayRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreatePeriodDayUseCase<R>
where
    R: PeriodDayRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICreatePeriodDayUseCase for CreatePeriodDayUseCase<R>
where
    R: PeriodDayRepository + Send + Sync,
{
    async fn execute(
        &self,
        request: CreatePeriodDayRequest,
    ) -> Result<PeriodDay, CreatePeriodDayError> {
        self.repository
            .create(NewPeriodDay {
                date: request.date,
                flow: request.flow,
                symptom_ids: request.symptom_ids,
                user_id: request.user_id,
                notes: request.notes,
            })
            .await
            .map_err(|e| match e {
                PeriodDayRepositoryError::DateAlreadyLogged => {
                    CreatePeriodDayError::DateAlreadyLogged
                }
                PeriodDayRepositoryError::DatabaseError(msg) => {
                    CreatePeriodDayError::RepositoryError(msg)
                }
            })
    }
}
