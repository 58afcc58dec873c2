//! Prefetched complexity-factor table.
//!
//! Resolving a complexity factor independently per element row is the
//! dominant cost of an aggregation, so all required (element type,
//! complexity parameter) pairs for a project are fetched in one batch
//! and resolved from memory during the pure aggregation pass.

use std::collections::HashMap;

use estima_core::catalog::ElementType;
use estima_core::constants::NEUTRAL_COMPLEXITY_FACTOR;
use estima_core::errors::FetchError;
use estima_core::models::{ComplexityFactor, EstimationParameter};
use estima_core::traits::IEstimationBackend;

/// In-memory (element type → complexity factor) lookup for one
/// computation.
#[derive(Debug, Clone, Default)]
pub struct ComplexityTable {
    factors: HashMap<ElementType, ComplexityFactor>,
}

impl ComplexityTable {
    /// Table with no complexity parameter: every lookup is neutral.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Build a table from already-fetched rows.
    pub fn from_rows(rows: Vec<ComplexityFactor>) -> Self {
        let factors = rows.into_iter().map(|f| (f.element_type, f)).collect();
        Self { factors }
    }

    /// Batch-fetch every factor the given element types may need.
    ///
    /// Without a complexity parameter there is nothing to fetch and
    /// the table degrades to neutral.
    pub fn prefetch(
        backend: &dyn IEstimationBackend,
        complexity: Option<&EstimationParameter>,
        element_types: &[ElementType],
    ) -> Result<Self, FetchError> {
        let Some(param) = complexity else {
            return Ok(Self::neutral());
        };

        let pairs: Vec<(ElementType, u64)> =
            element_types.iter().map(|&et| (et, param.id)).collect();
        let rows = backend.fetch_complexity_factors(&pairs)?;
        tracing::debug!(
            parameter_id = param.id,
            requested = pairs.len(),
            resolved = rows.len(),
            "complexity table prefetched"
        );
        Ok(Self::from_rows(rows))
    }

    /// The multiplier for an element type.
    ///
    /// A missing mapping is never an error — it degrades to the
    /// neutral multiplier so incomplete catalogs don't block
    /// estimation. A present row prefers its AI-adjusted factor over
    /// the base factor, and falls back to neutral when it has neither.
    pub fn resolve(&self, element_type: ElementType) -> f64 {
        self.factors
            .get(&element_type)
            .map(ComplexityFactor::effective_factor)
            .unwrap_or(NEUTRAL_COMPLEXITY_FACTOR)
    }

    /// Number of mapped element types.
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Whether the table carries no mappings.
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}
