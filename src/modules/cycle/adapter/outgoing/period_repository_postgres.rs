use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::cycle::application::ports::outgoing::{
    NewPeriod, PeriodRepository, PeriodRepositoryError,
};
use crate::modules::cycle::domain::entities::Period;

use super::sea_orm_entity::periods::{
    ActiveModel as PeriodActiveModel, Column as PeriodColumn, Entity as PeriodEntity,
};

#[derive(Clone, Debug)]
pub struct PeriodRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PeriodRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PeriodRepository for PeriodRepositoryPostgres {
    async fn insert_many(&self, periods: Vec<NewPeriod>) -> Result<u64, PeriodRepositoryError> {
        if periods.is_empty() {
            return Ok(0);
        }

        let count = periods.len() as u64;
        let models = periods.into_iter().map(|p| PeriodActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(p.user_id),
            date: Set(p.date),
            flow: Set(p.flow.as_str().to_string()),
            symptoms: Set(serde_json::json!(p.symptoms)),
            notes: Set(p.notes),
            created_at: NotSet,
        });

        PeriodEntity::insert_many(models)
            .exec(&*self.db)
            .await
            .map_err(|e| PeriodRepositoryError::DatabaseError(e.to_string()))?;

        Ok(count)
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Period>, PeriodRepositoryError> {
        let rows = PeriodEntity::find()
            .filter(PeriodColumn::UserId.eq(user_id))
            .order_by_asc(PeriodColumn::Date)
            .all(&*self.db)
            .await
            .map_err(|e| PeriodRepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Period::from).collect())
    }
}
