pub mod period_dates_query;

pub use period_dates_query::{PeriodDatesQuery, PeriodDatesQueryError};
