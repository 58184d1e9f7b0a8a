use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::cycle::application::ports::outgoing::{
    NewPeriodDay, PeriodDayRepository, PeriodDayRepositoryError,
};
use crate::modules::cycle::domain::entities::PeriodDay;

use super::sea_orm_entity::period_days::{
    ActiveModel as PeriodDayActiveModel, Column as PeriodDayColumn, Entity as PeriodDayEntity,
};

#[derive(Clone, Debug)]
pub struct PeriodDayRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PeriodDayRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PeriodDayRepository for PeriodDayRepositoryPostgres {
    async fn create(&self, day: NewPeriodDay) -> Result<PeriodDay, PeriodDayRepositoryError> {
        let active = PeriodDayActiveModel {
            id: Set(Uuid::new_v4()),
            date: Set(day.date),
            flow: Set(day.flow.map(|f| f.as_str().to_string())),
            symptom_ids: Set(serde_json::json!(day.symptom_ids)),
            user_id: Set(day.user_id),
            notes: Set(day.notes),
            updated_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23505")
                || err_str.contains("duplicate key")
                || err_str.contains("unique constraint")
            {
                return PeriodDayRepositoryError::DateAlreadyLogged;
            }
            PeriodDayRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(inserted.into())
    }

    async fn find_all(&self) -> Result<Vec<PeriodDay>, PeriodDayRepositoryError> {
        let rows = PeriodDayEntity::find()
            .order_by_asc(PeriodDayColumn::Date)
            .all(&*self.db)
            .await
            .map_err(|e| PeriodDayRepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(PeriodDay::from).collect())
    }

    async fn find_by_dates(
        &self,
        dates: &[NaiveDate],
    ) -> Result<Vec<PeriodDay>, PeriodDayRepositoryError> {
        if dates.is_empty() {
            return Ok(vec![]);
        }

        let rows = PeriodDayEntity::find()
            .filter(PeriodDayColumn::Date.is_in(dates.to_vec()))
            .all(&*self.db)
            .await
            .map_err(|e| PeriodDayRepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(PeriodDay::from).collect())
    }
}
