use crate::catalog::ElementType;

/// Estima system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed effort → hours conversion factor.
pub const HOURS_PER_EFFORT: f64 = 8.0;

/// Factor applied when no complexity mapping exists for an element type.
pub const NEUTRAL_COMPLEXITY_FACTOR: f64 = 1.0;

/// Default number of estimation parameters fetched per catalog load.
pub const DEFAULT_PARAMETER_LIMIT: usize = 6;

/// Name of the distinguished parameter kind that carries per-element
/// complexity multipliers.
pub const COMPLEXITY_PARAMETER_NAME: &str = "Complexity";

/// Element types requested from the predictor when the caller supplies
/// no explicit subset. These three carry the most signal in practice.
pub const DEFAULT_PREDICTION_TYPES: [ElementType; 3] = [
    ElementType::TriggersStoredProcs,
    ElementType::Reports,
    ElementType::Qa,
];
