use std::path::PathBuf;

use thiserror::Error;

/// Fatal taxonomy failures. Everything else during ingestion is absorbed into
/// `BuildDiagnostics`.
#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("Taxonomy unavailable: {} is not valid JSON: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
