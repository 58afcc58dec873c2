use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::ElementType;
use crate::errors::PredictionError;

/// One prediction call: requirement text plus the element types the
/// predictor is asked about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Requirement title.
    pub title: String,
    /// Requirement body, possibly empty.
    pub body: String,
    /// Element types the predictor should produce quantities for.
    pub element_types: Vec<ElementType>,
    /// Parameter ids forwarded opaquely — not interpreted locally.
    pub parameter_ids: Vec<u64>,
}

/// Text-based quantity predictor.
///
/// Returns a subset-scoped mapping: only types it was asked about (or
/// chose to answer for) appear. A deterministic predictor yields
/// identical mappings for identical requests; implementations hold no
/// cross-call state.
pub trait IWeightPredictor: Send + Sync {
    fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<HashMap<ElementType, f64>, PredictionError>;
}
