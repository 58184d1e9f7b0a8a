use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::modules::prediction::application::ports::outgoing::PeriodDatesQuery;
use crate::modules::prediction::domain::engine::{
    cycle_starts, cycle_stats, predict, upcoming_periods, CycleConfig, CyclePrediction,
    CycleStats, DateRange,
};

const UPCOMING_PERIOD_COUNT: usize = 3;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPredictionError {
    #[error("Query error: {0}")]
    QueryError(String),
}

/// Everything the dashboard and calendar need in one pass over the
/// user's history.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionReport {
    pub prediction: CyclePrediction,
    pub upcoming_periods: Vec<DateRange>,
    pub stats: CycleStats,
}

#[async_trait]
pub trait IGetPredictionUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<PredictionReport, GetPredictionError>;
}

#[derive(Clone)]
pub struct GetPredictionUseCase<Q>
where
    Q: PeriodDatesQuery + Send + Sync,
{
    query: Q,
    config: CycleConfig,
}

impl<Q> GetPredictionUseCase<Q>
where
    Q: PeriodDatesQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self {
            query,
            config: CycleConfig::default(),
        }
    }

    fn report(&self, dates: &[NaiveDate], today: NaiveDate) -> PredictionReport {
        let prediction = predict(dates, today, &self.config);
        let upcoming = upcoming_periods(&prediction, UPCOMING_PERIOD_COUNT, &self.config);
        let stats = cycle_stats(&cycle_starts(dates));

        PredictionReport {
            prediction,
            upcoming_periods: upcoming,
            stats,
        }
    }
}

#[async_trait]
impl<Q> IGetPredictionUseCase for GetPredictionUseCase<Q>
where
    Q: PeriodDatesQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<PredictionReport, GetPredictionError> {
        let dates = self
            .query
            .period_dates(user_id)
            .await
            .map_err(|e| GetPredictionError::QueryError(e.to_string()))?;

        Ok(self.report(&dates, Utc::now().date_naive()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::prediction::application::ports::outgoing::PeriodDatesQueryError;

    struct StubQuery {
        dates: Vec<NaiveDate>,
    }

    #[async_trait]
    impl PeriodDatesQuery for StubQuery {
        async fn period_dates(
            &self,
            _user_id: Uuid,
        ) -> Result<Vec<NaiveDate>, PeriodDatesQueryError> {
            Ok(self.dates.clone())
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn report_combines_prediction_upcoming_and_stats() {
        let use_case = GetPredictionUseCase::new(StubQuery { dates: vec![] });
        let dates = [d(2025, 5, 3), d(2025, 5, 4), d(2025, 6, 1)];

        let report = use_case.report(&dates, d(2025, 6, 10));

        assert_eq!(report.prediction.next_period_start, d(2025, 6, 29));
        assert_eq!(report.upcoming_periods.len(), 3);
        assert_eq!(report.upcoming_periods[0].start, d(2025, 6, 29));
        // Starts are 05-03 and 06-01, 29 days apart
        assert_eq!(report.stats.cycle_lengths, vec![29]);
    }

    #[tokio::test]
    async fn query_failure_is_mapped() {
        struct FailingQuery;

        #[async_trait]
        impl PeriodDatesQuery for FailingQuery {
            async fn period_dates(
                &self,
                _user_id: Uuid,
            ) -> Result<Vec<NaiveDate>, PeriodDatesQueryError> {
                Err(PeriodDatesQueryError::DatabaseError("timeout".to_string()))
            }
        }

        let use_case = GetPredictionUseCase::new(FailingQuery);
        let result = use_case.execute(Uuid::new_v4()).await;
        assert!(matches!(result, Err(GetPredictionError::QueryError(_))));
    }
}
