use async_trait::async_trait;

use crate::modules::auth::domain::entities::User;
use crate::modules::cycle::domain::entities::Symptom;

/// Dated symptom joined with its owning user, when that user still
/// exists.
#[derive(Debug, Clone, PartialEq)]
pub struct SymptomWithUser {
    pub symptom: Symptom,
    pub user: Option<User>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SymptomQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SymptomQuery: Send + Sync {
    async fn find_all_with_user(&self) -> Result<Vec<SymptomWithUser>, SymptomQueryError>;
}
