use serde::{Deserialize, Serialize};

use crate::catalog::ElementType;
use crate::constants::COMPLEXITY_PARAMETER_NAME;

/// How a parameter participates in the effort formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterRole {
    /// Per-element multiplier override, one parameter at most.
    Complexity,
    /// Applied per affected-element unit, scaled by the complexity factor.
    Multiplicative,
    /// Flat factor applied once per requirement.
    Additive,
}

/// The parameter kind as the backend delivers it: a display name plus
/// the has-affected-elements marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterKind {
    pub name: String,
    pub has_affected_elements: bool,
}

impl ParameterKind {
    /// Assign the role once, at catalog-load time. Re-deriving it per
    /// computation (or matching on a mutable display label) is exactly
    /// the breakage this tag exists to avoid.
    pub fn role(&self) -> ParameterRole {
        if self.name == COMPLEXITY_PARAMETER_NAME {
            ParameterRole::Complexity
        } else if self.has_affected_elements {
            ParameterRole::Multiplicative
        } else {
            ParameterRole::Additive
        }
    }
}

/// A weighting parameter from the estimation catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationParameter {
    pub id: u64,
    pub name: String,
    pub kind: ParameterKind,
    /// Base factor.
    pub factor: f64,
    /// AI-adjusted factor. Preferred over `factor` whenever present,
    /// including when it is 0.0.
    pub ai_factor: Option<f64>,
}

impl EstimationParameter {
    /// The factor the effort formula actually uses.
    pub fn effective_factor(&self) -> f64 {
        self.ai_factor.unwrap_or(self.factor)
    }

    /// Role assigned from the parameter kind.
    pub fn role(&self) -> ParameterRole {
        self.kind.role()
    }
}

/// Per-(element type × complexity parameter) multiplier row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityFactor {
    pub element_type: ElementType,
    /// Id of the complexity parameter this row belongs to.
    pub parameter_id: u64,
    pub factor: Option<f64>,
    pub ai_factor: Option<f64>,
}

impl ComplexityFactor {
    /// AI-adjusted factor if present, else the base factor, else 1.
    pub fn effective_factor(&self) -> f64 {
        self.ai_factor
            .or(self.factor)
            .unwrap_or(crate::constants::NEUTRAL_COMPLEXITY_FACTOR)
    }
}
