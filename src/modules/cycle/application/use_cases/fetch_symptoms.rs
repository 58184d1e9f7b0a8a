use async_trait::async_trait;

use crate::modules::cycle::application::ports::outgoing::{
    SymptomQuery, SymptomQueryError, SymptomWithUser,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchSymptomsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IFetchSymptomsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SymptomWithUser>, FetchSymptomsError>;
}

#[derive(Clone)]
pub struct FetchSymptomsUseCase<Q>
where
    Q: SymptomQuery + Send + Sync,
{
    query: Q,
}

impl<Q> FetchSymptomsUseCase<Q>
where
    Q: SymptomQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchSymptomsUseCase for FetchSymptomsUseCase<Q>
where
    Q: SymptomQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<SymptomWithUser>, FetchSymptomsError> {
        self.query.find_all_with_user().await.map_err(|e| match e {
            SymptomQueryError::DatabaseError(msg) => FetchSymptomsError::QueryError(msg),
        })
    }
}
