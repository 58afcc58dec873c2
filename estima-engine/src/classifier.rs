//! Parameter catalog partitioning.
//!
//! Runs once per catalog load. Splits the ordered parameter catalog
//! into the distinguished complexity parameter, the multiplicative
//! set, and the additive set. Order is preserved; no parameter lands
//! in more than one set.

use estima_core::models::{EstimationParameter, ParameterRole};

/// The role-partitioned parameter catalog.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedParameters {
    /// The unique complexity parameter, if the catalog has one.
    /// Absent ⇒ a neutral factor of 1 everywhere downstream.
    pub complexity: Option<EstimationParameter>,
    /// Applied per affected-element unit, scaled by the complexity factor.
    pub multiplicative: Vec<EstimationParameter>,
    /// Applied once per requirement, independent of element counts.
    pub additive: Vec<EstimationParameter>,
}

impl ClassifiedParameters {
    /// Id of the complexity parameter, if present.
    pub fn complexity_id(&self) -> Option<u64> {
        self.complexity.as_ref().map(|p| p.id)
    }
}

/// Partition the catalog by role, preserving catalog order.
///
/// The catalog should carry at most one complexity parameter. If it
/// carries more, the first wins and the rest are dropped entirely —
/// they never leak into the multiplicative or additive sets.
pub fn classify(catalog: &[EstimationParameter]) -> ClassifiedParameters {
    let mut out = ClassifiedParameters::default();

    for param in catalog {
        match param.role() {
            ParameterRole::Complexity => {
                if out.complexity.is_none() {
                    out.complexity = Some(param.clone());
                }
            }
            ParameterRole::Multiplicative => out.multiplicative.push(param.clone()),
            ParameterRole::Additive => out.additive.push(param.clone()),
        }
    }

    out
}
