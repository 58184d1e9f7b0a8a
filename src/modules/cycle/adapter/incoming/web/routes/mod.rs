mod create_period_day;
mod get_cycle_data;
mod get_cycle_overviews;
mod get_period_days;
mod get_symptoms;
mod seed;
mod sync_cycle_data;

pub use create_period_day::create_period_day_handler;
pub use get_cycle_data::get_cycle_data_handler;
pub use get_cycle_overviews::get_cycle_overviews_handler;
pub use get_period_days::get_period_days_handler;
pub use get_symptoms::get_symptoms_handler;
pub use seed::seed_handler;
pub use sync_cycle_data::sync_cycle_data_handler;

pub use create_period_day::__path_create_period_day_handler;
pub use get_cycle_data::__path_get_cycle_data_handler;
pub use get_cycle_overviews::__path_get_cycle_overviews_handler;
pub use get_period_days::__path_get_period_days_handler;
pub use get_symptoms::__path_get_symptoms_handler;
pub use seed::__path_seed_handler;
pub use sync_cycle_data::__path_sync_cycle_data_handler;

pub use create_period_day::{CreatePeriodDayDto, CreatePeriodDayResponse};
pub use get_cycle_data::{CycleDataResponse, PeriodDto, SymptomLogDto};
pub use get_cycle_overviews::{CycleOverviewDto, SymptomSummaryDto};
pub use get_period_days::PeriodDayDto;
pub use get_symptoms::{SymptomDto, SymptomUserDto};
pub use seed::SeedResponse;
pub use sync_cycle_data::{EntrySnapshotDto, LocalEntryDto, SyncOutcomeDto, SyncRequestDto};
