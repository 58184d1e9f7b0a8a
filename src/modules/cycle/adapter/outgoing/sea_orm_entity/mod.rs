pub mod cycle_data;
pub mod period_days;
pub mod periods;
pub mod symptom_logs;
pub mod symptoms;
