use serde::{Deserialize, Serialize};

use super::defaults;

/// Prediction-service client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Chat-completions endpoint URL.
    pub endpoint: String,
    /// Model identifier sent with each request.
    pub model: String,
    /// Whole-request timeout (seconds).
    pub timeout_secs: u64,
    /// Sampling temperature. 0.0 keeps the predictor deterministic.
    pub temperature: f32,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::DEFAULT_ENDPOINT.to_string(),
            model: defaults::DEFAULT_MODEL.to_string(),
            timeout_secs: defaults::DEFAULT_TIMEOUT_SECS,
            temperature: defaults::DEFAULT_TEMPERATURE,
        }
    }
}
