use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::cycle::domain::entities::{FlowIntensity, Period};

#[derive(Debug, Clone, PartialEq)]
pub struct NewPeriod {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub flow: FlowIntensity,
    pub symptoms: Vec<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PeriodRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PeriodRepository: Send + Sync {
    /// Bulk insert. Returns the number of rows written.
    async fn insert_many(&self, periods: Vec<NewPeriod>) -> Result<u64, PeriodRepositoryError>;

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Period>, PeriodRepositoryError>;
}
