// Taxonomy graph: snapshot ingestion, normalization, and the read-only maps
// the analysis pipeline runs against. Built once at startup, never mutated.

pub mod builder;
pub mod error;
pub mod handlers;
pub mod hierarchy;
pub mod loader;
pub mod models;
pub mod normalize;

pub use builder::{Taxonomy, TaxonomyBuilder, TaxonomyStats};
pub use error::TaxonomyError;
pub use loader::{load_taxonomy, SnapshotSpec};
pub use models::{BroaderSkill, SnapshotRole};
