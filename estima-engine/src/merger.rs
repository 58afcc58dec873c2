//! Applying a weight vector onto a requirement's element rows.

use estima_core::catalog::ElementType;
use estima_core::models::{ElementCount, WeightVector};

/// Merge a weight vector onto existing element rows.
///
/// Returns exactly one row per canonical element type, in catalog
/// order — types with no existing row are synthesized, never dropped.
/// Types inside `subset` (or every type, when `subset` is `None`) take
/// their quantity from the vector; types outside are forced to 0.
/// Existing actual quantities are preserved unless `clear_actuals`.
pub fn merge_rows(
    existing: &[ElementCount],
    weights: &WeightVector,
    subset: Option<&[ElementType]>,
    clear_actuals: bool,
) -> Vec<ElementCount> {
    ElementType::ALL
        .iter()
        .map(|&element_type| {
            let selected = subset.map_or(true, |s| s.contains(&element_type));
            let estimated = if selected {
                weights.get(element_type)
            } else {
                0.0
            };

            let actual = if clear_actuals {
                None
            } else {
                existing
                    .iter()
                    .find(|row| row.element_type == element_type)
                    .and_then(|row| row.actual)
            };

            ElementCount {
                element_type,
                estimated,
                actual,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_canonical_type_present_in_catalog_order() {
        let merged = merge_rows(&[], &WeightVector::zero(), None, false);
        assert_eq!(merged.len(), ElementType::COUNT);
        for (row, et) in merged.iter().zip(ElementType::ALL) {
            assert_eq!(row.element_type, et);
            assert_eq!(row.estimated, 0.0);
        }
    }

    #[test]
    fn subset_forces_outside_types_to_zero() {
        let weights: WeightVector = [
            (ElementType::TriggersStoredProcs, 5.0),
            (ElementType::Tables, 4.0),
        ]
        .into_iter()
        .collect();
        let subset = [ElementType::TriggersStoredProcs];

        let merged = merge_rows(&[], &weights, Some(&subset), false);

        let get = |et: ElementType| {
            merged
                .iter()
                .find(|r| r.element_type == et)
                .unwrap()
                .estimated
        };
        assert_eq!(get(ElementType::TriggersStoredProcs), 5.0);
        // In the vector but outside the subset: forced to zero.
        assert_eq!(get(ElementType::Tables), 0.0);
    }

    #[test]
    fn actuals_preserved_unless_cleared() {
        let existing = vec![ElementCount {
            element_type: ElementType::Reports,
            estimated: 2.0,
            actual: Some(7.0),
        }];
        let weights: WeightVector = [(ElementType::Reports, 3.0)].into_iter().collect();

        let merged = merge_rows(&existing, &weights, None, false);
        let reports = merged
            .iter()
            .find(|r| r.element_type == ElementType::Reports)
            .unwrap();
        assert_eq!(reports.estimated, 3.0);
        assert_eq!(reports.actual, Some(7.0));

        let cleared = merge_rows(&existing, &weights, None, true);
        let reports = cleared
            .iter()
            .find(|r| r.element_type == ElementType::Reports)
            .unwrap();
        assert_eq!(reports.actual, None);
    }
}
