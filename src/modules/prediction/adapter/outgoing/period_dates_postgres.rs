use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::cycle::adapter::outgoing::sea_orm_entity::periods::{
    Column as PeriodColumn, Entity as PeriodEntity,
};
use crate::modules::prediction::application::ports::outgoing::{
    PeriodDatesQuery, PeriodDatesQueryError,
};

/// Reads only the date column off the periods table.
#[derive(Clone, Debug)]
pub struct PeriodDatesPostgres {
    db: Arc<DatabaseConnection>,
}

impl PeriodDatesPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PeriodDatesQuery for PeriodDatesPostgres {
    async fn period_dates(&self, user_id: Uuid) -> Result<Vec<NaiveDate>, PeriodDatesQueryError> {
        PeriodEntity::find()
            .select_only()
            .column(PeriodColumn::Date)
            .filter(PeriodColumn::UserId.eq(user_id))
            .order_by_asc(PeriodColumn::Date)
            .into_tuple::<NaiveDate>()
            .all(&*self.db)
            .await
            .map_err(|e| PeriodDatesQueryError::DatabaseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn returns_dates_in_ascending_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                date_row(2025, 5, 3),
                date_row(2025, 6, 1),
            ]])
            .into_connection();

        let query = PeriodDatesPostgres::new(Arc::new(db));
        let dates = query.period_dates(Uuid::new_v4()).await.unwrap();

        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2025, 5, 3).unwrap(),
                NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            ]
        );
    }

    fn date_row(y: i32, m: u32, d: u32) -> std::collections::BTreeMap<&'static str, sea_orm::Value> {
        let mut row = std::collections::BTreeMap::new();
        row.insert(
            "date",
            sea_orm::Value::ChronoDate(Some(Box::new(
                NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            ))),
        );
        row
    }
}
