pub mod create_period_day;
pub mod fetch_cycle_data;
pub mod fetch_cycle_overviews;
pub mod fetch_period_days;
pub mod fetch_symptoms;
pub mod seed_demo_data;
pub mod sync_cycle_data;
