pub mod cycle_record_query_postgres;
pub mod period_day_repository_postgres;
pub mod period_repository_postgres;
pub mod sea_orm_entity;
pub mod symptom_log_repository_postgres;
pub mod symptom_query_postgres;

pub use cycle_record_query_postgres::CycleRecordQueryPostgres;
pub use period_day_repository_postgres::PeriodDayRepositoryPostgres;
pub use period_repository_postgres::PeriodRepositoryPostgres;
pub use symptom_log_repository_postgres::SymptomLogRepositoryPostgres;
pub use symptom_query_postgres::SymptomQueryPostgres;
