use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PeriodDatesQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side the engine runs on: just the user's logged period dates.
#[async_trait]
pub trait PeriodDatesQuery: Send + Sync {
    async fn period_dates(&self, user_id: Uuid) -> Result<Vec<NaiveDate>, PeriodDatesQueryError>;
}
