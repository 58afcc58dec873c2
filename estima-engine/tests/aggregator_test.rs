use estima_core::catalog::ElementType;
use estima_core::constants::HOURS_PER_EFFORT;
use estima_core::models::{ComplexityFactor, NeedEstimate};
use estima_engine::aggregator::{rollup_project, sort_needs, EffortAggregator};
use estima_engine::classifier::classify;
use estima_engine::complexity::ComplexityTable;
use test_fixtures::{need, parameter, project, requirement};

fn simple_aggregator() -> EffortAggregator {
    // One multiplicative parameter (factor 2), the complexity
    // parameter, one additive parameter (factor 3).
    let catalog = vec![
        parameter(1, "Team Experience", true, 2.0, None),
        parameter(9, "Complexity", true, 1.0, None),
        parameter(4, "Deployment Overhead", false, 3.0, None),
    ];
    let table = ComplexityTable::from_rows(vec![ComplexityFactor {
        element_type: ElementType::Tables,
        parameter_id: 9,
        factor: Some(2.0),
        ai_factor: Some(3.0),
    }]);
    EffortAggregator::new(classify(&catalog), table)
}

// ── PF is the unfiltered quantity sum ─────────────────────────────────────

#[test]
fn pf_sums_all_rows_including_zero_quantities() {
    let aggregator = simple_aggregator();
    let req = requirement(
        1,
        "Data model",
        &[
            (ElementType::Tables, 2.0),
            (ElementType::Reports, 1.0),
            (ElementType::Qa, 0.0),
        ],
    );

    let estimate = aggregator.estimate_requirement(&req);
    assert_eq!(estimate.pf, 3.0);
    assert_eq!(estimate.elements.len(), 3);
}

// ── Effort formula ────────────────────────────────────────────────────────

#[test]
fn effort_combines_multiplicative_and_additive_parts() {
    let aggregator = simple_aggregator();
    let req = requirement(
        1,
        "Data model",
        &[
            (ElementType::Tables, 2.0),  // 2 × 2.0 × 3.0 (ai complexity)
            (ElementType::Reports, 1.0), // 1 × 2.0 × 1.0 (no mapping)
            (ElementType::Qa, 0.0),      // contributes 0
        ],
    );

    let estimate = aggregator.estimate_requirement(&req);
    assert_eq!(estimate.effort, 12.0 + 2.0 + 3.0);
}

#[test]
fn zero_multiplicative_parameters_leave_only_additive_effort() {
    let catalog = vec![
        parameter(4, "Deployment Overhead", false, 2.0, None),
        parameter(5, "Coordination", false, 1.5, Some(1.0)),
    ];
    let aggregator = EffortAggregator::new(classify(&catalog), ComplexityTable::neutral());

    let heavy = requirement(1, "Heavy", &[(ElementType::Tables, 500.0)]);
    let empty = requirement(2, "Empty", &[]);

    assert_eq!(aggregator.estimate_requirement(&heavy).effort, 3.0);
    assert_eq!(aggregator.estimate_requirement(&empty).effort, 3.0);
}

#[test]
fn additive_effort_contributed_once_regardless_of_row_count() {
    let aggregator = simple_aggregator();
    let one_row = requirement(1, "One", &[(ElementType::Reports, 1.0)]);
    let five_rows = requirement(
        2,
        "Five",
        &[
            (ElementType::Reports, 1.0),
            (ElementType::Tables, 0.0),
            (ElementType::Forms, 0.0),
            (ElementType::Qa, 0.0),
            (ElementType::Scripting, 0.0),
        ],
    );

    // Same non-zero counts, so the additive part must not scale with rows.
    assert_eq!(
        aggregator.estimate_requirement(&one_row).effort,
        aggregator.estimate_requirement(&five_rows).effort
    );
}

// ── Hours conversion ──────────────────────────────────────────────────────

#[test]
fn hours_is_effort_times_eight_exactly() {
    let aggregator = simple_aggregator();
    let req = requirement(1, "Data model", &[(ElementType::Tables, 2.0)]);

    let estimate = aggregator.estimate_requirement(&req);
    assert_eq!(estimate.hours(), estimate.effort * HOURS_PER_EFFORT);

    let empty = aggregator.estimate_requirement(&requirement(2, "Empty", &[]));
    let no_params = EffortAggregator::new(classify(&[]), ComplexityTable::neutral())
        .estimate_requirement(&requirement(3, "Nothing", &[]));
    assert_eq!(empty.hours(), empty.effort * 8.0);
    assert_eq!(no_params.effort, 0.0);
    assert_eq!(no_params.hours(), 0.0);
}

// ── Completeness ──────────────────────────────────────────────────────────

#[test]
fn need_complete_iff_every_requirement_has_positive_pf() {
    let aggregator = simple_aggregator();

    let complete = aggregator.estimate_need(
        &need(1, "Billing"),
        &[
            requirement(1, "A", &[(ElementType::Tables, 1.0)]),
            requirement(2, "B", &[(ElementType::Reports, 2.0)]),
        ],
    );
    assert!(complete.complete);

    let incomplete = aggregator.estimate_need(
        &need(2, "Reporting"),
        &[
            requirement(3, "C", &[(ElementType::Tables, 1.0)]),
            requirement(4, "D", &[(ElementType::Qa, 0.0)]),
        ],
    );
    assert!(!incomplete.complete);
}

#[test]
fn need_with_no_requirements_is_complete() {
    let aggregator = simple_aggregator();
    let estimate = aggregator.estimate_need(&need(1, "Empty need"), &[]);
    assert!(estimate.complete);
    assert_eq!(estimate.pf, 0.0);
    assert_eq!(estimate.effort, 0.0);
}

// ── Ordering contract ─────────────────────────────────────────────────────

fn need_estimate(id: u64, name: &str, effort: f64, complete: bool) -> NeedEstimate {
    NeedEstimate {
        need_id: id,
        name: name.to_string(),
        pf: 0.0,
        effort,
        complete,
        degraded: false,
        requirements: Vec::new(),
    }
}

#[test]
fn complete_needs_first_then_descending_effort() {
    let mut needs = vec![
        need_estimate(1, "A", 50.0, true),
        need_estimate(2, "B", 90.0, false),
        need_estimate(3, "C", 80.0, true),
    ];

    sort_needs(&mut needs);

    let order: Vec<&str> = needs.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(order, vec!["C", "A", "B"]);
}

#[test]
fn ties_keep_fetch_order() {
    let mut needs = vec![
        need_estimate(1, "First", 10.0, true),
        need_estimate(2, "Second", 10.0, true),
        need_estimate(3, "Third", 10.0, false),
        need_estimate(4, "Fourth", 10.0, false),
    ];

    sort_needs(&mut needs);

    let ids: Vec<u64> = needs.iter().map(|n| n.need_id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

// ── Project rollup ────────────────────────────────────────────────────────

#[test]
fn project_totals_are_sums_over_needs() {
    let needs = vec![
        need_estimate(1, "A", 50.0, true),
        need_estimate(2, "B", 30.0, true),
    ];
    let project = rollup_project(&project(7, "CRM rollout"), needs);
    assert_eq!(project.project_id, 7);
    assert_eq!(project.name, "CRM rollout");
    assert_eq!(project.effort, 80.0);
    assert_eq!(project.hours(), 640.0);
}

// ── Determinism ───────────────────────────────────────────────────────────

#[test]
fn aggregating_a_frozen_snapshot_twice_is_bit_identical() {
    let aggregator = simple_aggregator();
    let reqs = vec![
        requirement(1, "A", &[(ElementType::Tables, 2.5), (ElementType::Qa, 0.75)]),
        requirement(2, "B", &[(ElementType::Reports, 1.125)]),
    ];
    let n = need(1, "Billing");

    let first = aggregator.estimate_need(&n, &reqs);
    let second = aggregator.estimate_need(&n, &reqs);

    assert_eq!(first.pf.to_bits(), second.pf.to_bits());
    assert_eq!(first.effort.to_bits(), second.effort.to_bits());
    for (a, b) in first.requirements.iter().zip(&second.requirements) {
        assert_eq!(a.pf.to_bits(), b.pf.to_bits());
        assert_eq!(a.effort.to_bits(), b.effort.to_bits());
    }
}
