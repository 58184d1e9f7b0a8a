pub mod period_dates_postgres;

pub use period_dates_postgres::PeriodDatesPostgres;
