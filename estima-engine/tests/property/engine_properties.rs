use estima_core::catalog::ElementType;
use estima_core::models::WeightVector;
use estima_engine::aggregator::EffortAggregator;
use estima_engine::classifier::classify;
use estima_engine::complexity::ComplexityTable;
use estima_engine::merger::merge_rows;
use proptest::prelude::*;
use test_fixtures::{parameter, requirement};

fn arb_element_type() -> impl Strategy<Value = ElementType> {
    (1u32..=13).prop_map(|id| ElementType::from_id(id).unwrap())
}

fn arb_counts() -> impl Strategy<Value = Vec<(ElementType, f64)>> {
    prop::collection::vec((arb_element_type(), 0.0f64..1000.0), 0..13)
}

proptest! {
    // ── PF is the plain quantity sum ──────────────────────────────────

    #[test]
    fn pf_equals_quantity_sum(counts in arb_counts()) {
        let aggregator = EffortAggregator::new(classify(&[]), ComplexityTable::neutral());
        let req = requirement(1, "R", &counts);

        let expected: f64 = counts.iter().map(|(_, q)| q).sum();
        prop_assert_eq!(aggregator.estimate_requirement(&req).pf, expected);
    }

    // ── Hours conversion is exact ─────────────────────────────────────

    #[test]
    fn hours_is_always_effort_times_eight(counts in arb_counts(), factor in 0.0f64..10.0) {
        let catalog = vec![
            parameter(1, "Mult", true, factor, None),
            parameter(2, "Add", false, factor, None),
        ];
        let aggregator = EffortAggregator::new(classify(&catalog), ComplexityTable::neutral());
        let estimate = aggregator.estimate_requirement(&requirement(1, "R", &counts));

        prop_assert_eq!(estimate.hours().to_bits(), (estimate.effort * 8.0).to_bits());
    }

    // ── Without multiplicative parameters counts are irrelevant ───────

    #[test]
    fn additive_only_effort_ignores_counts(counts in arb_counts(), add in 0.0f64..50.0) {
        let catalog = vec![parameter(4, "Overhead", false, add, None)];
        let aggregator = EffortAggregator::new(classify(&catalog), ComplexityTable::neutral());

        let effort = aggregator.estimate_requirement(&requirement(1, "R", &counts)).effort;
        prop_assert_eq!(effort, add);
    }

    // ── Merge always yields the full catalog ──────────────────────────

    #[test]
    fn merge_yields_one_row_per_canonical_type(
        weights in prop::collection::vec((arb_element_type(), 0.0f64..100.0), 0..13),
        subset in prop::option::of(prop::collection::vec(arb_element_type(), 0..13)),
    ) {
        let vector: WeightVector = weights.into_iter().collect();
        let merged = merge_rows(&[], &vector, subset.as_deref(), false);

        prop_assert_eq!(merged.len(), ElementType::COUNT);
        for (row, et) in merged.iter().zip(ElementType::ALL) {
            prop_assert_eq!(row.element_type, et);
            if let Some(s) = &subset {
                if !s.contains(&et) {
                    prop_assert_eq!(row.estimated, 0.0);
                }
            }
            prop_assert!(row.estimated >= 0.0);
        }
    }
}
