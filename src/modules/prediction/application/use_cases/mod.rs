pub mod get_prediction;
