//! Bottom-up PF and effort rollup.
//!
//! Element rows → requirement → need → project. Each requirement's
//! aggregation is independent of its siblings (no shared accumulator),
//! combined only by the final sums at need and project level.

use std::cmp::Ordering;

use estima_core::models::{NeedEstimate, ProjectEstimate, RequirementEstimate};
use estima_core::{Need, Project, Requirement};

use crate::classifier::ClassifiedParameters;
use crate::complexity::ComplexityTable;

/// Rolls PF and effort up from element rows, using a role-partitioned
/// parameter catalog and a prefetched complexity table.
pub struct EffortAggregator {
    params: ClassifiedParameters,
    complexity: ComplexityTable,
}

impl EffortAggregator {
    pub fn new(params: ClassifiedParameters, complexity: ComplexityTable) -> Self {
        Self { params, complexity }
    }

    /// Derive PF and effort for one requirement.
    ///
    /// - PF is the plain sum of estimated quantities over every row,
    ///   zero-quantity rows included.
    /// - Each row contributes `quantity × parameter factor × complexity
    ///   factor` per multiplicative parameter.
    /// - Additive parameters contribute their factor exactly once per
    ///   requirement, regardless of element counts.
    pub fn estimate_requirement(&self, requirement: &Requirement) -> RequirementEstimate {
        let pf: f64 = requirement.elements.iter().map(|row| row.estimated).sum();

        let mut multiplicative_effort = 0.0;
        for row in &requirement.elements {
            let complexity = self.complexity.resolve(row.element_type);
            for param in &self.params.multiplicative {
                multiplicative_effort += row.estimated * param.effective_factor() * complexity;
            }
        }

        let additive_effort: f64 = self
            .params
            .additive
            .iter()
            .map(|param| param.effective_factor())
            .sum();

        let effort = multiplicative_effort + additive_effort;
        tracing::debug!(
            requirement_id = requirement.id,
            pf,
            multiplicative_effort,
            additive_effort,
            "requirement estimated"
        );

        RequirementEstimate {
            requirement_id: requirement.id,
            name: requirement.name.clone(),
            pf,
            effort,
            elements: requirement.elements.clone(),
        }
    }

    /// Roll a need up from its requirements.
    pub fn estimate_need(&self, need: &Need, requirements: &[Requirement]) -> NeedEstimate {
        let estimates: Vec<RequirementEstimate> = requirements
            .iter()
            .map(|req| self.estimate_requirement(req))
            .collect();

        let pf = estimates.iter().map(|e| e.pf).sum();
        let effort = estimates.iter().map(|e| e.effort).sum();
        // Vacuously true for a need with zero requirements.
        let complete = estimates.iter().all(|e| e.pf > 0.0);

        NeedEstimate {
            need_id: need.id,
            name: need.name.clone(),
            pf,
            effort,
            complete,
            degraded: false,
            requirements: estimates,
        }
    }

    /// Zero-total placeholder for a need whose requirement fetch
    /// failed. Siblings compute normally.
    pub fn degraded_need(&self, need: &Need) -> NeedEstimate {
        NeedEstimate {
            need_id: need.id,
            name: need.name.clone(),
            pf: 0.0,
            effort: 0.0,
            complete: true,
            degraded: true,
            requirements: Vec::new(),
        }
    }
}

/// Display ordering: complete needs first, incomplete after; within
/// each group descending effort. Stable — ties keep fetch order.
pub fn sort_needs(needs: &mut [NeedEstimate]) {
    needs.sort_by(|a, b| match (a.complete, b.complete) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => b.effort.total_cmp(&a.effort),
    });
}

/// Sum already-ordered needs into a project estimate.
pub fn rollup_project(project: &Project, needs: Vec<NeedEstimate>) -> ProjectEstimate {
    let pf = needs.iter().map(|n| n.pf).sum();
    let effort = needs.iter().map(|n| n.effort).sum();
    ProjectEstimate {
        project_id: project.id,
        name: project.name.clone(),
        pf,
        effort,
        needs,
    }
}
