pub mod cycle_record_query;
pub mod period_day_repository;
pub mod period_repository;
pub mod symptom_log_repository;
pub mod symptom_query;

pub use cycle_record_query::{CycleRecordQuery, CycleRecordQueryError, CycleRecordWithUser};
pub use period_day_repository::{NewPeriodDay, PeriodDayRepository, PeriodDayRepositoryError};
pub use period_repository::{NewPeriod, PeriodRepository, PeriodRepositoryError};
pub use symptom_log_repository::{
    NewSymptomLog, SymptomLogRepository, SymptomLogRepositoryError,
};
pub use symptom_query::{SymptomQuery, SymptomQueryError, SymptomWithUser};
