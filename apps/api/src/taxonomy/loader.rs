//! Snapshot loading: the only file I/O in the service. Runs once at startup.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::taxonomy::models::SnapshotRole;
use crate::taxonomy::{Taxonomy, TaxonomyBuilder, TaxonomyError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotSpec {
    pub path: PathBuf,
    pub role: SnapshotRole,
}

impl SnapshotSpec {
    pub fn new(path: impl Into<PathBuf>, role: SnapshotRole) -> Self {
        Self {
            path: path.into(),
            role,
        }
    }
}

/// Reads and merges every snapshot. Missing or unreadable files are skipped
/// and counted; a file that is not JSON at all is fatal.
pub fn load_taxonomy(snapshots: &[SnapshotSpec]) -> Result<Taxonomy, TaxonomyError> {
    let mut builder = TaxonomyBuilder::new();

    for spec in snapshots {
        load_snapshot(&mut builder, spec)?;
    }

    let taxonomy = builder.build();
    let stats = taxonomy.stats();
    info!(
        "Taxonomy ready: {} skills, {} occupations, {} scorable relations, {} hierarchy edges",
        stats.skills, stats.occupations, stats.scorable_relations, stats.hierarchy_edges
    );
    if !stats.diagnostics.is_clean() {
        warn!("Taxonomy built with skipped input: {:?}", stats.diagnostics);
    }
    Ok(taxonomy)
}

fn load_snapshot(builder: &mut TaxonomyBuilder, spec: &SnapshotSpec) -> Result<(), TaxonomyError> {
    let bytes = match std::fs::read(&spec.path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Snapshot not found, skipping: {}", spec.path.display());
            builder.diagnostics_mut().missing_files += 1;
            return Ok(());
        }
        Err(e) => {
            warn!("Snapshot unreadable, skipping {}: {e}", spec.path.display());
            builder.diagnostics_mut().unreadable_files += 1;
            return Ok(());
        }
    };

    let doc: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|source| TaxonomyError::Unavailable {
            path: spec.path.clone(),
            source,
        })?;

    let summary = builder.add_snapshot(&doc, spec.role);
    builder.diagnostics_mut().loaded_files += 1;

    match spec.role {
        SnapshotRole::Skills => info!(
            "{}: {} skills and {} hierarchy edges loaded",
            display_name(&spec.path),
            summary.skills,
            summary.hierarchy_edges
        ),
        SnapshotRole::Concepts => info!(
            "{}: {} occupations mapped ({} skills)",
            display_name(&spec.path),
            summary.occupations,
            summary.skills
        ),
    }
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_loads_skills_and_concepts_files() {
        let dir = TempDir::new().unwrap();
        let skills = write(
            &dir,
            "skills.json",
            &json!({"data": {"concepts": [
                {"id": "1", "preferred_label": "Python"},
                {"id": "2", "preferred_label": "SQL", "broader": [{"id": "9"}]}
            ]}})
            .to_string(),
        );
        let concepts = write(
            &dir,
            "concepts.json",
            &json!({"data": {"concepts": [
                {"id": "J1", "preferred_label": "Analyst", "type": "occupation-name",
                 "related": [{"id": "1"}, {"id": "2"}]}
            ]}})
            .to_string(),
        );

        let taxonomy = load_taxonomy(&[
            SnapshotSpec::new(skills, SnapshotRole::Skills),
            SnapshotSpec::new(concepts, SnapshotRole::Concepts),
        ])
        .unwrap();

        assert_eq!(taxonomy.skills().len(), 2);
        assert_eq!(taxonomy.occupations().len(), 1);
        assert_eq!(taxonomy.diagnostics().loaded_files, 2);
        assert_eq!(taxonomy.broader_of("2")[0].id, "9");
    }

    #[test]
    fn test_missing_file_is_not_fatal() {
        let dir = TempDir::new().unwrap();
        let taxonomy = load_taxonomy(&[SnapshotSpec::new(
            dir.path().join("absent.json"),
            SnapshotRole::Skills,
        )])
        .unwrap();
        assert!(taxonomy.skills().is_empty());
        assert_eq!(taxonomy.diagnostics().missing_files, 1);
    }

    #[test]
    fn test_unparseable_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let bad = write(&dir, "broken.json", "{\"data\": {\"concepts\": [");
        let err = load_taxonomy(&[SnapshotSpec::new(bad.clone(), SnapshotRole::Skills)])
            .unwrap_err();
        match err {
            TaxonomyError::Unavailable { path, .. } => assert_eq!(path, bad),
        }
    }

    #[test]
    fn test_wrong_shape_is_counted_and_skipped() {
        let dir = TempDir::new().unwrap();
        let odd = write(&dir, "odd.json", "[1, 2, 3]");
        let taxonomy =
            load_taxonomy(&[SnapshotSpec::new(odd, SnapshotRole::Concepts)]).unwrap();
        assert_eq!(taxonomy.diagnostics().malformed_files, 1);
        assert!(taxonomy.relations().is_empty());
    }
}
