//! # estima-engine
//!
//! The estimation computation engine: partitions the parameter catalog
//! into roles, resolves complexity multipliers from a prefetched table,
//! rolls PF and effort up from element rows to requirement, need, and
//! project level, merges predicted weight vectors onto element rows,
//! and hands out generation tokens so superseded computations are
//! discarded instead of merged.
//!
//! Everything here is synchronous and pure given fully materialized
//! inputs; the only I/O is the batched prefetch in [`project::estimate_project`].

pub mod aggregator;
pub mod classifier;
pub mod complexity;
pub mod generation;
pub mod merger;
pub mod project;

pub use aggregator::EffortAggregator;
pub use classifier::{classify, ClassifiedParameters};
pub use complexity::ComplexityTable;
pub use generation::{GenerationCounter, GenerationToken};
pub use merger::merge_rows;
pub use project::estimate_project;
