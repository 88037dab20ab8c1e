//! Learning roadmap: turns the most demanded gaps into study suggestions,
//! lifting each narrow skill to its broader category where one is known.

use serde::{Deserialize, Serialize};

use crate::analysis::gaps::SkillGap;
use crate::taxonomy::{BroaderSkill, Taxonomy};

pub const ROADMAP_LENGTH: usize = 5;

const DEFAULT_LEVEL: &str = "Typically requires post-secondary specialisation";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub skill_id: String,
    pub skill_name: String,
    /// How many matched occupations list this skill as missing.
    pub unlocks: usize,
    pub broader: Vec<BroaderSkill>,
    pub level: String,
    pub action: String,
}

/// `gaps` must already be ranked by demand.
pub fn build_roadmap(gaps: &[SkillGap], taxonomy: &Taxonomy) -> Vec<RoadmapStep> {
    gaps.iter()
        .take(ROADMAP_LENGTH)
        .map(|gap| {
            let broader = taxonomy.broader_of(&gap.skill_id);
            let topic = broader
                .first()
                .map(|b| b.label.clone())
                .unwrap_or_else(|| gap.skill_name.clone());
            RoadmapStep {
                skill_id: gap.skill_id.clone(),
                skill_name: gap.skill_name.clone(),
                unlocks: gap.count,
                broader,
                level: DEFAULT_LEVEL.to_string(),
                action: format!("Look for courses covering {topic}"),
            }
        })
        .collect()
}
