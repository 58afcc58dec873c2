use estima_core::catalog::ElementType;
use estima_core::models::{
    ElementCount, EstimationParameter, ParameterKind, WeightVector,
};

// ── Model serialization round-trips ───────────────────────────────────────

#[test]
fn element_count_round_trips() {
    let row = ElementCount {
        element_type: ElementType::Reports,
        estimated: 2.5,
        actual: Some(3.0),
    };
    let json = serde_json::to_string(&row).unwrap();
    let back: ElementCount = serde_json::from_str(&json).unwrap();
    assert_eq!(back, row);
}

#[test]
fn parameter_round_trips_with_optional_ai_factor() {
    let param = EstimationParameter {
        id: 3,
        name: "Architecture Reuse".to_string(),
        kind: ParameterKind {
            name: "Architecture Reuse".to_string(),
            has_affected_elements: true,
        },
        factor: 0.8,
        ai_factor: None,
    };
    let json = serde_json::to_string(&param).unwrap();
    assert!(json.contains("\"ai_factor\":null"));
    let back: EstimationParameter = serde_json::from_str(&json).unwrap();
    assert_eq!(back, param);
}

#[test]
fn weight_vector_round_trips_densely() {
    let vector: WeightVector = [(ElementType::Qa, 1.5)].into_iter().collect();
    let json = serde_json::to_string(&vector).unwrap();
    let back: WeightVector = serde_json::from_str(&json).unwrap();
    assert_eq!(back, vector);
    assert_eq!(back.get(ElementType::Qa), 1.5);
    assert_eq!(back.get(ElementType::Tables), 0.0);
}
