pub mod backend;
pub mod predictor;

pub use backend::IEstimationBackend;
pub use predictor::{IWeightPredictor, PredictionRequest};
