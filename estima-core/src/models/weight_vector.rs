use serde::{Deserialize, Serialize};

use crate::catalog::ElementType;

/// A dense weight vector spanning the whole 13-type catalog.
///
/// Types the predictor never mentioned are 0. Produced by the
/// prediction adapter and consumed by the row merger.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeightVector {
    weights: [f64; ElementType::COUNT],
}

impl WeightVector {
    /// All-zero vector.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Weight for an element type.
    pub fn get(&self, element_type: ElementType) -> f64 {
        self.weights[element_type.index()]
    }

    /// Set the weight for an element type. Negative values are clamped
    /// to 0 — quantities are non-negative by invariant.
    pub fn set(&mut self, element_type: ElementType, value: f64) {
        self.weights[element_type.index()] = value.max(0.0);
    }

    /// Iterate the full catalog in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementType, f64)> + '_ {
        ElementType::ALL.iter().map(move |&et| (et, self.get(et)))
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }
}

impl FromIterator<(ElementType, f64)> for WeightVector {
    fn from_iter<I: IntoIterator<Item = (ElementType, f64)>>(iter: I) -> Self {
        let mut v = Self::zero();
        for (et, value) in iter {
            v.set(et, value);
        }
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_types_are_zero() {
        let v: WeightVector = [(ElementType::Reports, 3.0)].into_iter().collect();
        assert_eq!(v.get(ElementType::Reports), 3.0);
        assert_eq!(v.get(ElementType::Tables), 0.0);
        assert_eq!(v.total(), 3.0);
    }

    #[test]
    fn negative_weights_clamp_to_zero() {
        let mut v = WeightVector::zero();
        v.set(ElementType::Qa, -2.0);
        assert_eq!(v.get(ElementType::Qa), 0.0);
    }
}
