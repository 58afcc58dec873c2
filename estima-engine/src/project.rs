//! Project-level orchestration: fetch, classify, prefetch, aggregate.
//!
//! The only function in the engine that touches the backend. Everything
//! it hands to the aggregator is fully materialized first.

use std::collections::BTreeSet;

use estima_core::catalog::ElementType;
use estima_core::constants::DEFAULT_PARAMETER_LIMIT;
use estima_core::errors::FetchError;
use estima_core::models::{NeedEstimate, ProjectEstimate};
use estima_core::traits::IEstimationBackend;
use estima_core::{Need, Project, Requirement};

use crate::aggregator::{rollup_project, sort_needs, EffortAggregator};
use crate::classifier;
use crate::complexity::ComplexityTable;

/// Compute a full project estimate from the backend.
///
/// Flow: load the parameter catalog once, classify it, fetch the
/// project's needs and their requirements, batch-prefetch every
/// complexity factor in use, then run the pure aggregation pass and
/// apply the display ordering.
///
/// A failed parameter or need fetch fails the computation since there
/// is nothing meaningful to aggregate without them. A failed
/// requirement fetch degrades only that need to zero totals, and a
/// failed complexity fetch degrades every factor to neutral.
pub fn estimate_project(
    backend: &dyn IEstimationBackend,
    project: &Project,
) -> Result<ProjectEstimate, FetchError> {
    let catalog = backend.fetch_parameters(DEFAULT_PARAMETER_LIMIT)?;
    let params = classifier::classify(&catalog);

    let needs = backend.fetch_needs(project.id)?;

    // Materialize requirements per need up front; per-need failures
    // degrade in isolation.
    let mut fetched: Vec<(Need, Option<Vec<Requirement>>)> = Vec::with_capacity(needs.len());
    for need in needs {
        match backend.fetch_requirements_with_elements(need.id) {
            Ok(requirements) => fetched.push((need, Some(requirements))),
            Err(e) => {
                tracing::warn!(
                    need_id = need.id,
                    error = %e,
                    "requirement fetch failed, need degraded to zero totals"
                );
                fetched.push((need, None));
            }
        }
    }

    // One batched complexity lookup for every element type in use.
    // A failed lookup never blocks the estimate: every factor falls
    // back to neutral and the computation proceeds.
    let types_in_use: BTreeSet<ElementType> = fetched
        .iter()
        .filter_map(|(_, reqs)| reqs.as_ref())
        .flatten()
        .flat_map(|req| req.elements.iter().map(|row| row.element_type))
        .collect();
    let types_in_use: Vec<ElementType> = types_in_use.into_iter().collect();
    let complexity =
        match ComplexityTable::prefetch(backend, params.complexity.as_ref(), &types_in_use) {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(
                    project_id = project.id,
                    error = %e,
                    "complexity fetch failed, factors degraded to neutral"
                );
                ComplexityTable::neutral()
            }
        };

    let aggregator = EffortAggregator::new(params, complexity);
    let mut estimates: Vec<NeedEstimate> = fetched
        .iter()
        .map(|(need, requirements)| match requirements {
            Some(reqs) => aggregator.estimate_need(need, reqs),
            None => aggregator.degraded_need(need),
        })
        .collect();

    sort_needs(&mut estimates);
    let estimate = rollup_project(project, estimates);
    tracing::info!(
        project_id = project.id,
        needs = estimate.needs.len(),
        pf = estimate.pf,
        effort = estimate.effort,
        "project estimated"
    );
    Ok(estimate)
}
