use crate::catalog::ElementType;
use crate::errors::FetchError;
use crate::models::{ComplexityFactor, EstimationParameter, Need, Requirement};

/// Read-only backend surface the engine computes from.
///
/// Implementations own the wire format; the engine never writes back.
/// Callers must complete every fetch a computation needs before
/// invoking the aggregator — the aggregation pass itself is pure.
pub trait IEstimationBackend: Send + Sync {
    /// Ordered parameter catalog, role info included.
    fn fetch_parameters(&self, limit: usize) -> Result<Vec<EstimationParameter>, FetchError>;

    /// Needs belonging to a project, in fetch order.
    fn fetch_needs(&self, project_id: u64) -> Result<Vec<Need>, FetchError>;

    /// Requirements of a need with their affected-element rows.
    fn fetch_requirements_with_elements(
        &self,
        need_id: u64,
    ) -> Result<Vec<Requirement>, FetchError>;

    /// Batched complexity-factor lookup.
    ///
    /// The engine builds the full (element type, complexity parameter)
    /// pair list for a project once and issues a single call — never
    /// one remote lookup per element row. Pairs with no row are simply
    /// absent from the result.
    fn fetch_complexity_factors(
        &self,
        pairs: &[(ElementType, u64)],
    ) -> Result<Vec<ComplexityFactor>, FetchError>;
}
