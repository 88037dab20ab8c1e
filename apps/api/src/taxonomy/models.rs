use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Display name used when an occupation id has no label in the taxonomy.
pub const UNKNOWN_OCCUPATION: &str = "Specialist role";

/// Display name used when a skill id has no label in the taxonomy.
pub const UNKNOWN_SKILL: &str = "Unknown skill";

/// How untyped records inside a snapshot are classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotRole {
    /// Untyped concept records are skills (e.g. `skills.json`).
    Skills,
    /// Records are classified by their `type`; untyped ones are unrelated.
    Concepts,
}

/// A skill record after normalization. `broader` is deduplicated, in snapshot
/// order, and never contains `id` itself.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillRecord {
    pub id: String,
    pub label: String,
    pub broader: Vec<String>,
}

/// An occupation record after normalization. `requirements` is the union of
/// every cross-reference the record carries.
#[derive(Debug, Clone, PartialEq)]
pub struct OccupationRecord {
    pub id: String,
    pub label: String,
    pub requirements: BTreeSet<String>,
}

/// A normalized taxonomy node.
#[derive(Debug, Clone, PartialEq)]
pub enum Concept {
    Skill(SkillRecord),
    Occupation(OccupationRecord),
    Unrelated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementRelation {
    pub occupation_id: String,
    pub requirement_skill_ids: BTreeSet<String>,
}

/// Parent skill returned by the hierarchy resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroaderSkill {
    pub id: String,
    pub label: String,
}

/// Counters for everything ingestion skipped or repaired.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildDiagnostics {
    pub loaded_files: usize,
    pub missing_files: usize,
    pub unreadable_files: usize,
    pub malformed_files: usize,
    pub skipped_records: usize,
    pub skipped_references: usize,
    pub self_references: usize,
    pub conflicting_labels: usize,
}

impl BuildDiagnostics {
    pub fn absorb(&mut self, other: &BuildDiagnostics) {
        self.loaded_files += other.loaded_files;
        self.missing_files += other.missing_files;
        self.unreadable_files += other.unreadable_files;
        self.malformed_files += other.malformed_files;
        self.skipped_records += other.skipped_records;
        self.skipped_references += other.skipped_references;
        self.self_references += other.self_references;
        self.conflicting_labels += other.conflicting_labels;
    }

    /// True when nothing was skipped or repaired.
    pub fn is_clean(&self) -> bool {
        *self
            == BuildDiagnostics {
                loaded_files: self.loaded_files,
                ..Default::default()
            }
    }
}
