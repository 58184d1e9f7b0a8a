use async_trait::async_trait;

use crate::modules::auth::domain::entities::User;
use crate::modules::cycle::domain::entities::CycleRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct CycleRecordWithUser {
    pub record: CycleRecord,
    pub user: Option<User>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CycleRecordQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CycleRecordQuery: Send + Sync {
    async fn find_all_with_user(&self) -> Result<Vec<CycleRecordWithUser>, CycleRecordQueryError>;
}
