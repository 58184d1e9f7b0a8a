pub mod auth;
pub mod cycle;
pub mod prediction;
