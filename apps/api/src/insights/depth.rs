use serde::{Deserialize, Serialize};

use crate::analysis::detector::DetectedSkill;

/// Stems that signal ownership or leadership anywhere in the document.
const LEADERSHIP_MARKERS: &[&str] = &[
    "ansvar",
    "ledde",
    "strategisk",
    "manager",
    "lead",
    "senior",
    "responsible",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthLevel {
    Leading,
    Operational,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDepth {
    pub skill_id: String,
    pub skill_name: String,
    pub level: DepthLevel,
}

/// Labels every detected skill with the document-wide depth level.
/// `text_lower` must already be lowercased.
pub fn assess_depth(detected: &[DetectedSkill], text_lower: &str) -> Vec<SkillDepth> {
    let level = if LEADERSHIP_MARKERS.iter().any(|m| text_lower.contains(m)) {
        DepthLevel::Leading
    } else {
        DepthLevel::Operational
    };

    detected
        .iter()
        .map(|skill| SkillDepth {
            skill_id: skill.id.clone(),
            skill_name: skill.name.clone(),
            level,
        })
        .collect()
}
