use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::cycle::application::ports::outgoing::{
    NewSymptomLog, SymptomLogRepository, SymptomLogRepositoryError,
};
use crate::modules::cycle::domain::entities::SymptomLog;

use super::sea_orm_entity::symptom_logs::{
    ActiveModel as SymptomLogActiveModel, Column as SymptomLogColumn, Entity as SymptomLogEntity,
};

#[derive(Clone, Debug)]
pub struct SymptomLogRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SymptomLogRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SymptomLogRepository for SymptomLogRepositoryPostgres {
    async fn insert_many(
        &self,
        logs: Vec<NewSymptomLog>,
    ) -> Result<u64, SymptomLogRepositoryError> {
        if logs.is_empty() {
            return Ok(0);
        }

        let count = logs.len() as u64;
        let models = logs.into_iter().map(|log| SymptomLogActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(log.user_id),
            date: Set(log.date),
            symptom_type: Set(log.symptom_type),
            intensity: Set(log.intensity),
            notes: Set(log.notes),
        });

        SymptomLogEntity::insert_many(models)
            .exec(&*self.db)
            .await
            .map_err(|e| SymptomLogRepositoryError::DatabaseError(e.to_string()))?;

        Ok(count)
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<SymptomLog>, SymptomLogRepositoryError> {
        let rows = SymptomLogEntity::find()
            .filter(SymptomLogColumn::UserId.eq(user_id))
            .order_by_asc(SymptomLogColumn::Date)
            .all(&*self.db)
            .await
            .map_err(|e| SymptomLogRepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(SymptomLog::from).collect())
    }
}
