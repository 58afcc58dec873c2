use serde::{Deserialize, Serialize};

use crate::constants::HOURS_PER_EFFORT;
use crate::models::ElementCount;

/// Derived totals for one requirement. Recomputed on demand, never
/// independently mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementEstimate {
    pub requirement_id: u64,
    pub name: String,
    /// Function points: the plain sum of estimated quantities.
    pub pf: f64,
    /// Weighted effort (multiplicative + additive parts).
    pub effort: f64,
    /// The rows the totals were derived from.
    pub elements: Vec<ElementCount>,
}

impl RequirementEstimate {
    /// Effort expressed in hours.
    pub fn hours(&self) -> f64 {
        self.effort * HOURS_PER_EFFORT
    }
}

/// Derived totals for one need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeedEstimate {
    pub need_id: u64,
    pub name: String,
    pub pf: f64,
    pub effort: f64,
    /// Every requirement has PF > 0. Vacuously true with zero
    /// requirements. Affects only display ordering.
    pub complete: bool,
    /// True when this need's requirement fetch failed and the totals
    /// were degraded to zero. Siblings are unaffected.
    pub degraded: bool,
    pub requirements: Vec<RequirementEstimate>,
}

impl NeedEstimate {
    pub fn hours(&self) -> f64 {
        self.effort * HOURS_PER_EFFORT
    }

    pub fn requirement_count(&self) -> usize {
        self.requirements.len()
    }
}

/// Derived totals for a whole project, needs in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEstimate {
    pub project_id: u64,
    pub name: String,
    pub pf: f64,
    pub effort: f64,
    pub needs: Vec<NeedEstimate>,
}

impl ProjectEstimate {
    pub fn hours(&self) -> f64 {
        self.effort * HOURS_PER_EFFORT
    }
}
