//! The weight prediction adapter.
//!
//! Wraps any [`IWeightPredictor`] and turns its subset-scoped answers
//! into dense vectors spanning the full catalog.

use estima_core::catalog::ElementType;
use estima_core::constants::DEFAULT_PREDICTION_TYPES;
use estima_core::errors::PredictionError;
use estima_core::models::WeightVector;
use estima_core::traits::{IWeightPredictor, PredictionRequest};

/// Converts free text plus a requested element-type subset into a
/// dense weight vector.
///
/// Holds no cross-call state: identical inputs against a deterministic
/// predictor yield identical vectors.
pub struct WeightPredictionAdapter<P: IWeightPredictor> {
    predictor: P,
}

impl<P: IWeightPredictor> WeightPredictionAdapter<P> {
    pub fn new(predictor: P) -> Self {
        Self { predictor }
    }

    /// Consume the adapter, returning the wrapped predictor.
    pub fn into_inner(self) -> P {
        self.predictor
    }

    /// Generate a weight vector for a requirement.
    ///
    /// With an explicit `subset` only its members may carry a non-zero
    /// value — predictor answers for anything else are discarded. With
    /// no subset the predictor is asked about the default high-signal
    /// types, and every value it returns is kept. Types the predictor
    /// never mentioned are 0 either way.
    ///
    /// `parameter_ids` are forwarded to the predictor opaquely.
    pub fn generate_weights(
        &self,
        title: &str,
        body: &str,
        subset: Option<&[ElementType]>,
        parameter_ids: &[u64],
    ) -> Result<WeightVector, PredictionError> {
        let requested: Vec<ElementType> = match subset {
            Some(s) => s.to_vec(),
            None => DEFAULT_PREDICTION_TYPES.to_vec(),
        };

        let request = PredictionRequest {
            title: title.to_string(),
            body: body.to_string(),
            element_types: requested,
            parameter_ids: parameter_ids.to_vec(),
        };

        let predicted = self.predictor.predict(&request)?;

        let vector: WeightVector = match subset {
            Some(s) => predicted
                .into_iter()
                .filter(|(et, _)| s.contains(et))
                .collect(),
            None => predicted.into_iter().collect(),
        };

        tracing::debug!(
            title,
            total = vector.total(),
            "weight vector generated"
        );
        Ok(vector)
    }
}
