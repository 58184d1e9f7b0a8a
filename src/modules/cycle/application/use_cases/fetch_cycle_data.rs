use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::cycle::application::ports::outgoing::{
    PeriodRepository, SymptomLogRepository,
};
use crate::modules::cycle::domain::entities::{Period, SymptomLog};
use tracing::error;

/// A user's raw cycle history: period rows plus the flat symptom log.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleDataBundle {
    pub periods: Vec<Period>,
    pub symptom_logs: Vec<SymptomLog>,
}

/// Whatever goes wrong underneath, the caller sees a single opaque
/// failure message.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchCycleDataError {
    #[error("Failed to fetch cycle data")]
    FetchFailed,
}

#[async_trait]
pub trait IFetchCycleDataUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<CycleDataBundle, FetchCycleDataError>;
}

#[derive(Clone)]
pub struct FetchCycleDataUseCase<P, S>
where
    P: PeriodRepository + Send + Sync,
    S: SymptomLogRepository + Send + Sync,
{
    periods: P,
    symptom_logs: S,
}

impl<P, S> FetchCycleDataUseCase<P, S>
where
    P: PeriodRepository + Send + Sync,
    S: SymptomLogRepository + Send + Sync,
{
    pub fn new(periods: P, symptom_logs: S) -> Self {
        Self {
            periods,
            symptom_logs,
        }
    }
}

#[async_trait]
impl<P, S> IFetchCycleDataUseCase for FetchCycleDataUseCase<P, S>
where
    P: PeriodRepository + Send + Sync,
    S: SymptomLogRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<CycleDataBundle, FetchCycleDataError> {
        let periods = self.periods.find_by_user(user_id).await.map_err(|e| {
            error!(error = %e, "Period lookup failed");
            FetchCycleDataError::FetchFailed
        })?;

        let symptom_logs = self.symptom_logs.find_by_user(user_id).await.map_err(|e| {
            error!(error = %e, "Symptom log lookup failed");
            FetchCycleDataError::FetchFailed
        })?;

        Ok(CycleDataBundle {
            periods,
            symptom_logs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::cycle::application::ports::outgoing::{
        NewPeriod, NewSymptomLog, PeriodRepositoryError, SymptomLogRepositoryError,
    };
    use crate::modules::cycle::domain::entities::FlowIntensity;
    use chrono::NaiveDate;

    struct StubPeriods {
        result: Result<Vec<Period>, PeriodRepositoryError>,
    }

    #[async_trait]
    impl PeriodRepository for StubPeriods {
        async fn insert_many(
            &self,
            _periods: Vec<NewPeriod>,
        ) -> Result<u64, PeriodRepositoryError> {
            unreachable!("not exercised")
        }

        async fn find_by_user(&self, _user_id: Uuid) -> Result<Vec<Period>, PeriodRepositoryError> {
            self.result.clone()
        }
    }

    struct StubLogs {
        result: Result<Vec<SymptomLog>, SymptomLogRepositoryError>,
    }

    #[async_trait]
    impl SymptomLogRepository for StubLogs {
        async fn insert_many(
            &self,
            _logs: Vec<NewSymptomLog>,
        ) -> Result<u64, SymptomLogRepositoryError> {
            unreachable!("not exercised")
        }

        async fn find_by_user(
            &self,
            _user_id: Uuid,
        ) -> Result<Vec<SymptomLog>, SymptomLogRepositoryError> {
            self.result.clone()
        }
    }

    fn period(user_id: Uuid) -> Period {
        Period {
            id: Uuid::new_v4(),
            user_id,
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            flow: FlowIntensity::Medium,
            symptoms: vec!["cramps".to_string()],
            notes: None,
        }
    }

    #[tokio::test]
    async fn bundles_periods_and_symptom_logs() {
        let user_id = Uuid::new_v4();
        let use_case = FetchCycleDataUseCase::new(
            StubPeriods {
                result: Ok(vec![period(user_id)]),
            },
            StubLogs { result: Ok(vec![]) },
        );

        let bundle = use_case.execute(user_id).await.unwrap();
        assert_eq!(bundle.periods.len(), 1);
        assert!(bundle.symptom_logs.is_empty());
    }

    #[tokio::test]
    async fn any_failure_collapses_to_fetch_failed() {
        let use_case = FetchCycleDataUseCase::new(
            StubPeriods {
                result: Err(PeriodRepositoryError::DatabaseError(
                    "connection reset".to_string(),
                )),
            },
            StubLogs { result: Ok(vec![]) },
        );

        let result = use_case.execute(Uuid::new_v4()).await;
        assert!(matches!(result, Err(FetchCycleDataError::FetchFailed)));
        assert_eq!(
            FetchCycleDataError::FetchFailed.to_string(),
            "Failed to fetch cycle data"
        );
    }
}
