//! # estima-core
//!
//! Foundation crate for the Estima estimation engine.
//! Defines the canonical element-type catalog, all shared types, traits,
//! errors, config, and constants. Every other crate in the workspace
//! depends on this.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use catalog::ElementType;
pub use errors::{EstimaError, EstimaResult};
pub use models::{
    ComplexityFactor, ElementCount, EstimationParameter, Need, ParameterRole, Project,
    Requirement, WeightVector,
};
