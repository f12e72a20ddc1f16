//! Common types and traits for all use cases

pub mod batch_outcome;
pub mod usecase_metadata;

// Re-exports
pub use batch_outcome::BatchOutcome;
pub use usecase_metadata::UseCaseMetadata;
