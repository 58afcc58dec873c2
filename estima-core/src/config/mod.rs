pub mod defaults;
pub mod predictor_config;

pub use predictor_config::PredictorConfig;
