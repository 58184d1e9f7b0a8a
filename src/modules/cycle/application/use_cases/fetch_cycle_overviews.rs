use async_trait::async_trait;

use crate::modules::cycle::application::ports::outgoing::{
    CycleRecordQuery, CycleRecordQueryError, CycleRecordWithUser,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchCycleOverviewsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IFetchCycleOverviewsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CycleRecordWithUser>, FetchCycleOverviewsError>;
}

#[derive(Clone)]
pub struct FetchCycleOverviewsUseCase<Q>
where
    Q: CycleRecordQuery + Send + Sync,
{
    query: Q,
}

impl<Q> FetchCycleOverviewsUseCase<Q>
where
    Q: CycleRecordQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchCycleOverviewsUseCase for FetchCycleOverviewsUseCase<Q>
where
    Q: CycleRecordQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<CycleRecordWithUser>, FetchCycleOverviewsError> {
        self.query.find_all_with_user().await.map_err(|e| match e {
            CycleRecordQueryError::DatabaseError(msg) => FetchCycleOverviewsError::QueryError(msg),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::cycle::domain::entities::{CycleRecord, SymptomSummary};
    use chrono::NaiveDate;
    use uuid::Uuid;

    struct StubQuery {
        rows: Vec<CycleRecordWithUser>,
    }

    #[async_trait]
    impl CycleRecordQuery for StubQuery {
        async fn find_all_with_user(
            &self,
        ) -> Result<Vec<CycleRecordWithUser>, CycleRecordQueryError> {
            Ok(self.rows.clone())
        }
    }

    #[tokio::test]
    async fn returns_all_records() {
        let row = CycleRecordWithUser {
            record: CycleRecord {
                id: Uuid::new_v4(),
                user_id: Uuid::new_v4(),
                period_day_ids: vec![Uuid::new_v4()],
                symptom_summary: SymptomSummary {
                    date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                    symptom_type: "cramps".to_string(),
                    intensity: 7,
                    notes: None,
                },
            },
            user: None,
        };
        let use_case = FetchCycleOverviewsUseCase::new(StubQuery {
            rows: vec![row.clone()],
        });

        let rows = use_case.execute().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].record.period_day_ids.len(), 1);
    }
}
