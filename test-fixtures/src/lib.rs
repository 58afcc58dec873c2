//! Shared builders and a canned backend for cross-crate tests.

use std::collections::{HashMap, HashSet};

use estima_core::catalog::ElementType;
use estima_core::errors::FetchError;
use estima_core::models::{
    ComplexityFactor, ElementCount, EstimationParameter, Need, ParameterKind, Project, Requirement,
};
use estima_core::traits::IEstimationBackend;

/// Parameter builder.
pub fn parameter(
    id: u64,
    name: &str,
    has_affected_elements: bool,
    factor: f64,
    ai_factor: Option<f64>,
) -> EstimationParameter {
    EstimationParameter {
        id,
        name: name.to_string(),
        kind: ParameterKind {
            name: name.to_string(),
            has_affected_elements,
        },
        factor,
        ai_factor,
    }
}

/// A 6-parameter catalog resembling the production one: two
/// multiplicative parameters, the complexity parameter, and three
/// additive parameters.
pub fn standard_catalog() -> Vec<EstimationParameter> {
    vec![
        parameter(1, "Team Experience", true, 1.2, None),
        parameter(2, "Complexity", true, 1.0, None),
        parameter(3, "Architecture Reuse", true, 0.8, Some(0.9)),
        parameter(4, "Deployment Overhead", false, 2.0, None),
        parameter(5, "Coordination", false, 1.5, Some(1.0)),
        parameter(6, "Documentation", false, 0.5, None),
    ]
}

/// Requirement builder from (element type, estimated quantity) pairs.
pub fn requirement(id: u64, name: &str, counts: &[(ElementType, f64)]) -> Requirement {
    Requirement {
        id,
        name: name.to_string(),
        body: None,
        elements: counts
            .iter()
            .map(|&(et, qty)| ElementCount::new(et, qty))
            .collect(),
    }
}

/// Project builder.
pub fn project(id: u64, name: &str) -> Project {
    Project {
        id,
        name: name.to_string(),
    }
}

/// Need builder.
pub fn need(id: u64, name: &str) -> Need {
    Need {
        id,
        name: name.to_string(),
        code: None,
        body: None,
    }
}

/// Canned in-memory backend with per-need failure injection.
#[derive(Debug, Default)]
pub struct FixtureBackend {
    pub parameters: Vec<EstimationParameter>,
    /// project id → needs, in fetch order.
    pub needs: HashMap<u64, Vec<Need>>,
    /// need id → requirements, in fetch order.
    pub requirements: HashMap<u64, Vec<Requirement>>,
    /// (element type, parameter id) → complexity row.
    pub complexity_factors: HashMap<(ElementType, u64), ComplexityFactor>,
    /// Need ids whose requirement fetch fails.
    pub failing_needs: HashSet<u64>,
    /// When set, every complexity-factor fetch fails.
    pub failing_complexity: bool,
}

impl FixtureBackend {
    pub fn new(parameters: Vec<EstimationParameter>) -> Self {
        Self {
            parameters,
            ..Self::default()
        }
    }

    pub fn with_need(
        mut self,
        project_id: u64,
        need: Need,
        requirements: Vec<Requirement>,
    ) -> Self {
        self.requirements.insert(need.id, requirements);
        self.needs.entry(project_id).or_default().push(need);
        self
    }

    pub fn with_complexity_factor(
        mut self,
        element_type: ElementType,
        parameter_id: u64,
        factor: Option<f64>,
        ai_factor: Option<f64>,
    ) -> Self {
        self.complexity_factors.insert(
            (element_type, parameter_id),
            ComplexityFactor {
                element_type,
                parameter_id,
                factor,
                ai_factor,
            },
        );
        self
    }

    pub fn with_failing_need(mut self, need_id: u64) -> Self {
        self.failing_needs.insert(need_id);
        self
    }

    pub fn with_failing_complexity(mut self) -> Self {
        self.failing_complexity = true;
        self
    }
}

impl IEstimationBackend for FixtureBackend {
    fn fetch_parameters(&self, limit: usize) -> Result<Vec<EstimationParameter>, FetchError> {
        Ok(self.parameters.iter().take(limit).cloned().collect())
    }

    fn fetch_needs(&self, project_id: u64) -> Result<Vec<Need>, FetchError> {
        Ok(self.needs.get(&project_id).cloned().unwrap_or_default())
    }

    fn fetch_requirements_with_elements(
        &self,
        need_id: u64,
    ) -> Result<Vec<Requirement>, FetchError> {
        if self.failing_needs.contains(&need_id) {
            return Err(FetchError::Backend {
                entity: "requirement",
                reason: format!("injected failure for need {need_id}"),
            });
        }
        Ok(self.requirements.get(&need_id).cloned().unwrap_or_default())
    }

    fn fetch_complexity_factors(
        &self,
        pairs: &[(ElementType, u64)],
    ) -> Result<Vec<ComplexityFactor>, FetchError> {
        if self.failing_complexity {
            return Err(FetchError::Backend {
                entity: "complexity factor",
                reason: "injected failure".to_string(),
            });
        }
        Ok(pairs
            .iter()
            .filter_map(|pair| self.complexity_factors.get(pair).cloned())
            .collect())
    }
}
