//! Deterministic dataset generation for shopgen.
//!
//! The engine runs three stages in order (customers, order lines, orders),
//! each seeded from the run seed, and writes one CSV per stage.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;

pub use engine::{Dataset, GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GenerationReport, TableReport};
