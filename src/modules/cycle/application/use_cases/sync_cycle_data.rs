use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::cycle::application::ports::outgoing::{
    NewPeriodDay, PeriodDayRepository, PeriodDayRepositoryError,
};
use crate::modules::cycle::domain::reconcile::{reconcile, LocalEntry, Reconciliation};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SyncCycleDataError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ISyncCycleDataUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        entries: Vec<LocalEntry>,
    ) -> Result<Vec<Reconciliation>, SyncCycleDataError>;
}

/// Reconciles a client's cached period-day entries against the server.
/// `LocalOnly` entries are persisted; conflicts are reported back and
/// left untouched.
#[derive(Clone)]
pub struct SyncCycleDataUseCase<R>
where
    R: PeriodDayRepository + Send + Sync,
{
    repository: R,
}

impl<R> SyncCycleDataUseCase<R>
where
    R: PeriodDayRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ISyncCycleDataUseCase for SyncCycleDataUseCase<R>
where
    R: PeriodDayRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        entries: Vec<LocalEntry>,
    ) -> Result<Vec<Reconciliation>, SyncCycleDataError> {
        let dates: Vec<_> = entries.iter().map(|e| e.date).collect();
        let server_rows = self
            .repository
            .find_by_dates(&dates)
            .await
            .map_err(|e| SyncCycleDataError::RepositoryError(e.to_string()))?;

        let mut outcomes = Vec::with_capacity(entries.len());
        for entry in entries {
            let server = server_rows.iter().find(|d| d.date == entry.date);
            let outcome = reconcile(entry, server);

            if let Reconciliation::LocalOnly { entry } = &outcome {
                let result = self
                    .repository
                    .create(NewPeriodDay {
                        date: entry.date,
                        flow: entry.flow,
                        symptom_ids: vec![],
                        user_id,
                        notes: entry.notes.clone(),
                    })
                    .await;

                match result {
                    Ok(_) => {}
                    // Lost a race against another writer; the row now
                    // exists, so the server copy stands.
                    Err(PeriodDayRepositoryError::DateAlreadyLogged) => {
                        outcomes.push(Reconciliation::ServerAuthoritative { date: entry.date });
                        continue;
                    }
                    Err(e) => {
                        return Err(SyncCycleDataError::RepositoryError(e.to_string()));
                    }
                }
            }

            outcomes.push(outcome);
        }

        Ok(outcomes)
    }
}
