//! Normalization: turns one raw snapshot document into typed `Concept`s.
//!
//! Snapshot shapes drift between sources and versions, so the walk does not
//! assume a fixed depth. Any object carrying `id` / `preferred_label` is a
//! record; records nested in `narrower` trees or wrapper objects are found
//! the same way as top-level `data.concepts` entries. Below a skill-bearing
//! key (`skills`, `kompetenser`) a flat `{ id: label }` object is read as a
//! skill map.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::taxonomy::models::{
    BuildDiagnostics, Concept, OccupationRecord, SkillRecord, SnapshotRole,
};

const SKILL_FIELDS: &[&str] = &["skills", "kompetenser"];
const REFERENCE_FIELDS: &[&str] = &["related", "broader", "close_match", "exact_match"];
const OCCUPATION_TYPES: &[&str] = &["occupation-name", "occupation"];
const SKILL_TYPE: &str = "skill";

/// Result of normalizing one snapshot document.
#[derive(Debug, Default)]
pub struct NormalizedSnapshot {
    pub concepts: Vec<Concept>,
    pub diagnostics: BuildDiagnostics,
}

/// Normalizes a parsed snapshot. Never fails: anything unusable is counted
/// in the returned diagnostics and skipped.
pub fn normalize_snapshot(doc: &Value, role: SnapshotRole) -> NormalizedSnapshot {
    let mut out = NormalizedSnapshot::default();
    let scope = Scope {
        records_are_skills: role == SnapshotRole::Skills,
        under_skill_key: false,
    };
    walk(doc, scope, &mut out);

    let has_concepts_root = doc
        .pointer("/data/concepts")
        .map(Value::is_array)
        .unwrap_or(false);
    if !has_concepts_root && out.concepts.is_empty() {
        out.diagnostics.malformed_files += 1;
    }
    out
}

/// Where the walk currently is. Untyped records default to skills in a
/// skills snapshot or anywhere below a skill-bearing key, but only the
/// latter turns a flat string object into an `{ id: label }` skill map.
#[derive(Debug, Clone, Copy)]
struct Scope {
    records_are_skills: bool,
    under_skill_key: bool,
}

impl Scope {
    fn skill_context(self) -> bool {
        self.records_are_skills || self.under_skill_key
    }
}

fn walk(value: &Value, scope: Scope, out: &mut NormalizedSnapshot) {
    match value {
        Value::Array(items) => {
            for item in items {
                walk(item, scope, out);
            }
        }
        Value::Object(map) => {
            if is_record(map) {
                let concept = classify(map, scope.skill_context(), &mut out.diagnostics);
                if let Some(concept) = concept {
                    out.concepts.push(concept);
                }
            } else if scope.under_skill_key && is_label_map(map) {
                for (id, label) in map {
                    if let Some(label) = label.as_str().map(str::trim).filter(|l| !l.is_empty()) {
                        out.concepts.push(Concept::Skill(SkillRecord {
                            id: id.clone(),
                            label: label.to_string(),
                            broader: Vec::new(),
                        }));
                    } else {
                        out.diagnostics.skipped_records += 1;
                    }
                }
                return;
            }

            for (key, child) in map {
                if REFERENCE_FIELDS.contains(&key.as_str()) {
                    continue;
                }
                if child.is_object() || child.is_array() {
                    let nested = Scope {
                        under_skill_key: scope.under_skill_key
                            || SKILL_FIELDS.contains(&key.as_str()),
                        ..scope
                    };
                    walk(child, nested, out);
                }
            }
        }
        _ => {}
    }
}

fn is_record(map: &Map<String, Value>) -> bool {
    map.contains_key("id") || map.contains_key("preferred_label")
}

fn is_label_map(map: &Map<String, Value>) -> bool {
    !map.is_empty() && map.values().all(Value::is_string)
}

fn classify(
    map: &Map<String, Value>,
    skill_context: bool,
    diagnostics: &mut BuildDiagnostics,
) -> Option<Concept> {
    let (Some(id), Some(label)) = (read_id(map.get("id")), read_label(map)) else {
        diagnostics.skipped_records += 1;
        return None;
    };

    let kind = map.get("type").and_then(Value::as_str);
    let concept = match kind {
        Some(t) if OCCUPATION_TYPES.contains(&t) => {
            let mut requirements = BTreeSet::new();
            for field in REFERENCE_FIELDS {
                requirements.extend(read_references(map.get(*field), diagnostics));
            }
            Concept::Occupation(OccupationRecord {
                id,
                label,
                requirements,
            })
        }
        Some(t) if t == SKILL_TYPE || skill_context => skill_record(id, label, map, diagnostics),
        None if skill_context => skill_record(id, label, map, diagnostics),
        _ => Concept::Unrelated,
    };
    Some(concept)
}

fn skill_record(
    id: String,
    label: String,
    map: &Map<String, Value>,
    diagnostics: &mut BuildDiagnostics,
) -> Concept {
    let mut broader: Vec<String> = Vec::new();
    for parent in read_references(map.get("broader"), diagnostics) {
        if parent == id {
            diagnostics.self_references += 1;
        } else if !broader.contains(&parent) {
            broader.push(parent);
        }
    }
    Concept::Skill(SkillRecord { id, label, broader })
}

/// Ids are opaque; numeric ids are stringified.
fn read_id(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn read_label(map: &Map<String, Value>) -> Option<String> {
    map.get("preferred_label")
        .or_else(|| map.get("label"))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
}

fn read_references(value: Option<&Value>, diagnostics: &mut BuildDiagnostics) -> Vec<String> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let id = match item {
                Value::Object(reference) => read_id(reference.get("id")),
                other => read_id(Some(other)),
            };
            if id.is_none() {
                diagnostics.skipped_references += 1;
            }
            id
        })
        .collect()
}
