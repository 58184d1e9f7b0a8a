mod get_prediction;

pub use get_prediction::get_prediction_handler;
pub use get_prediction::__path_get_prediction_handler;
pub use get_prediction::{CycleStatsDto, DateRangeDto, PredictionResponse};
