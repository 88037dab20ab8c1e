//! Taxonomy graph: the immutable maps every analysis reads from, and the
//! builder that assembles them from normalized snapshots.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::taxonomy::models::{
    BuildDiagnostics, Concept, OccupationRecord, RequirementRelation, SkillRecord, SnapshotRole,
    UNKNOWN_OCCUPATION, UNKNOWN_SKILL,
};
use crate::taxonomy::normalize::normalize_snapshot;

/// Normalized, read-only taxonomy. Built once per process.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    skills: BTreeMap<String, String>,
    occupations: BTreeMap<String, String>,
    relations: Vec<RequirementRelation>,
    hierarchy: HashMap<String, Vec<String>>,
    diagnostics: BuildDiagnostics,
    built_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaxonomyStats {
    pub skills: usize,
    pub occupations: usize,
    pub relations: usize,
    pub scorable_relations: usize,
    pub hierarchy_edges: usize,
    pub diagnostics: BuildDiagnostics,
    pub built_at: DateTime<Utc>,
}

impl Taxonomy {
    pub fn skills(&self) -> &BTreeMap<String, String> {
        &self.skills
    }

    pub fn occupations(&self) -> &BTreeMap<String, String> {
        &self.occupations
    }

    /// Requirement relations ordered by occupation id.
    pub fn relations(&self) -> &[RequirementRelation] {
        &self.relations
    }

    pub fn hierarchy(&self) -> &HashMap<String, Vec<String>> {
        &self.hierarchy
    }

    pub fn diagnostics(&self) -> &BuildDiagnostics {
        &self.diagnostics
    }

    pub fn skill_label(&self, id: &str) -> &str {
        skill_label(&self.skills, id)
    }

    pub fn relation_for(&self, occupation_id: &str) -> Option<&RequirementRelation> {
        self.relations
            .binary_search_by(|r| r.occupation_id.as_str().cmp(occupation_id))
            .ok()
            .map(|i| &self.relations[i])
    }

    pub fn stats(&self) -> TaxonomyStats {
        TaxonomyStats {
            skills: self.skills.len(),
            occupations: self.occupations.len(),
            relations: self.relations.len(),
            scorable_relations: self
                .relations
                .iter()
                .filter(|r| !r.requirement_skill_ids.is_empty())
                .count(),
            hierarchy_edges: self.hierarchy.values().map(Vec::len).sum(),
            diagnostics: self.diagnostics().clone(),
            built_at: self.built_at,
        }
    }
}

/// Resolves a skill id to its display name, falling back to the placeholder.
pub fn skill_label<'a>(skills: &'a BTreeMap<String, String>, id: &str) -> &'a str {
    skills.get(id).map(String::as_str).unwrap_or(UNKNOWN_SKILL)
}

/// Same as [`skill_label`] for occupation ids.
pub fn occupation_label<'a>(occupations: &'a BTreeMap<String, String>, id: &str) -> &'a str {
    occupations
        .get(id)
        .map(String::as_str)
        .unwrap_or(UNKNOWN_OCCUPATION)
}

/// What a single snapshot contributed, for the startup log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnapshotSummary {
    pub skills: usize,
    pub hierarchy_edges: usize,
    pub occupations: usize,
}

/// Accumulates concepts from any number of snapshots. Ids are deduplicated:
/// the first label seen wins, requirement sets and broader edges are unioned.
#[derive(Debug, Default)]
pub struct TaxonomyBuilder {
    skills: BTreeMap<String, String>,
    occupations: BTreeMap<String, String>,
    requirements: BTreeMap<String, BTreeSet<String>>,
    hierarchy: HashMap<String, Vec<String>>,
    diagnostics: BuildDiagnostics,
}

impl TaxonomyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics_mut(&mut self) -> &mut BuildDiagnostics {
        &mut self.diagnostics
    }

    /// Normalizes one parsed snapshot document and merges it in.
    pub fn add_snapshot(&mut self, doc: &Value, role: SnapshotRole) -> SnapshotSummary {
        let normalized = normalize_snapshot(doc, role);
        self.diagnostics.absorb(&normalized.diagnostics);

        let mut summary = SnapshotSummary::default();
        for concept in normalized.concepts {
            match &concept {
                Concept::Skill(s) => {
                    summary.skills += 1;
                    summary.hierarchy_edges += s.broader.len();
                }
                Concept::Occupation(_) => summary.occupations += 1,
                Concept::Unrelated => {}
            }
            self.add_concept(concept);
        }
        summary
    }

    pub fn add_concept(&mut self, concept: Concept) {
        match concept {
            Concept::Skill(skill) => self.add_skill(skill),
            Concept::Occupation(occupation) => self.add_occupation(occupation),
            Concept::Unrelated => {}
        }
    }

    fn add_skill(&mut self, skill: SkillRecord) {
        let SkillRecord { id, label, broader } = skill;
        insert_label(&mut self.skills, &id, label, &mut self.diagnostics);

        if broader.is_empty() {
            return;
        }
        let parents = self.hierarchy.entry(id).or_default();
        for parent in broader {
            if !parents.contains(&parent) {
                parents.push(parent);
            }
        }
    }

    fn add_occupation(&mut self, occupation: OccupationRecord) {
        let OccupationRecord {
            id,
            label,
            requirements,
        } = occupation;
        insert_label(&mut self.occupations, &id, label, &mut self.diagnostics);
        self.requirements.entry(id).or_default().extend(requirements);
    }

    pub fn build(self) -> Taxonomy {
        let relations = self
            .requirements
            .into_iter()
            .map(|(occupation_id, requirement_skill_ids)| RequirementRelation {
                occupation_id,
                requirement_skill_ids,
            })
            .collect();

        Taxonomy {
            skills: self.skills,
            occupations: self.occupations,
            relations,
            hierarchy: self.hierarchy,
            diagnostics: self.diagnostics,
            built_at: Utc::now(),
        }
    }
}

fn insert_label(
    map: &mut BTreeMap<String, String>,
    id: &str,
    label: String,
    diagnostics: &mut BuildDiagnostics,
) {
    match map.get(id) {
        Some(existing) if *existing != label => diagnostics.conflicting_labels += 1,
        Some(_) => {}
        None => {
            map.insert(id.to_string(), label);
        }
    }
}
