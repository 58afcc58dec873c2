pub mod element_count;
pub mod estimate;
pub mod parameter;
pub mod project;
pub mod weight_vector;

pub use element_count::ElementCount;
pub use estimate::{NeedEstimate, ProjectEstimate, RequirementEstimate};
pub use parameter::{ComplexityFactor, EstimationParameter, ParameterKind, ParameterRole};
pub use project::{Need, Project, Requirement};
pub use weight_vector::WeightVector;
