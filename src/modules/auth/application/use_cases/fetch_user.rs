use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::UserQuery;
use crate::modules::auth::domain::entities::User;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IFetchUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<User, FetchUserError>;
}

#[derive(Clone)]
pub struct FetchUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> FetchUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchUserUseCase for FetchUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<User, FetchUserError> {
        self.query
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchUserError::QueryError(e.to_string()))?
            .ok_or(FetchUserError::UserNotFound)
    }
}
