use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::cycle::domain::entities::{FlowIntensity, PeriodDay};

#[derive(Debug, Clone, PartialEq)]
pub struct NewPeriodDay {
    pub date: NaiveDate,
    pub flow: Option<FlowIntensity>,
    pub symptom_ids: Vec<Uuid>,
    pub user_id: Uuid,
    pub notes: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PeriodDayRepositoryError {
    /// The unique date constraint rejected a second entry for this day.
    #[error("A period day for this date already exists")]
    DateAlreadyLogged,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PeriodDayRepository: Send + Sync {
    async fn create(&self, day: NewPeriodDay) -> Result<PeriodDay, PeriodDayRepositoryError>;

    async fn find_all(&self) -> Result<Vec<PeriodDay>, PeriodDayRepositoryError>;

    async fn find_by_dates(
        &self,
        dates: &[NaiveDate],
    ) -> Result<Vec<PeriodDay>, PeriodDayRepositoryError>;
}
