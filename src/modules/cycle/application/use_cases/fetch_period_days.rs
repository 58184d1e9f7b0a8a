use async_trait::async_trait;

use crate::modules::cycle::application::ports::outgoing::{
    PeriodDayRepository, PeriodDayRepositoryError,
};
use crate::modules::cycle::domain::entities::PeriodDay;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchPeriodDaysError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IFetchPeriodDaysUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<PeriodDay>, FetchPeriodDaysError>;
}

#[derive(Clone)]
pub struct FetchPeriodDaysUseCase<R>
where
    R: PeriodDayRepository + Send + Sync,
{
    repository: R,
}

impl<R> FetchPeriodDaysUseCase<R>
where
    R: PeriodDayRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IFetchPeriodDaysUseCase for FetchPeriodDaysUseCase<R>
where
    R: PeriodDayRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<PeriodDay>, FetchPeriodDaysError> {
        self.repository.find_all().await.map_err(|e| match e {
            PeriodDayRepositoryError::DatabaseError(msg) => FetchPeriodDaysError::QueryError(msg),
            other => FetchPeriodDaysError::QueryError(other.to_string()),
        })
    }
}
