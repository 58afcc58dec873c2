use serde::{Deserialize, Serialize};

use crate::catalog::ElementType;

/// An affected-element row: (requirement × element type) → quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementCount {
    pub element_type: ElementType,
    /// Estimated quantity. Never negative.
    pub estimated: f64,
    /// Quantity actually observed once the work is done, if recorded.
    pub actual: Option<f64>,
}

impl ElementCount {
    /// New row with an estimated quantity and no actual.
    ///
    /// Negative quantities are clamped to 0 — counts are non-negative
    /// by invariant.
    pub fn new(element_type: ElementType, estimated: f64) -> Self {
        Self {
            element_type,
            estimated: estimated.max(0.0),
            actual: None,
        }
    }

    /// Zero-quantity row for an element type. Contributes 0 to PF and
    /// effort but is never dropped from a result set.
    pub fn zero(element_type: ElementType) -> Self {
        Self::new(element_type, 0.0)
    }
}
