use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::cycle::domain::entities::SymptomLog;

#[derive(Debug, Clone, PartialEq)]
pub struct NewSymptomLog {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub symptom_type: String,
    pub intensity: i32,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SymptomLogRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SymptomLogRepository: Send + Sync {
    /// Bulk insert. Returns the number of rows written.
    async fn insert_many(
        &self,
        logs: Vec<NewSymptomLog>,
    ) -> Result<u64, SymptomLogRepositoryError>;

    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<SymptomLog>, SymptomLogRepositoryError>;
}
