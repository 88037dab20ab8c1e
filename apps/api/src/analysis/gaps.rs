//! Gap aggregation: which missing skill would unlock the most matches.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::analysis::scorer::OccupationMatch;
use crate::taxonomy::builder::skill_label;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill_id: String,
    pub skill_name: String,
    /// Number of distinct matches whose missing set contains this skill.
    pub count: usize,
}

/// Demand counter for one analysis run. Owned by the caller; never shared
/// between runs.
#[derive(Debug, Default)]
pub struct GapTally {
    counts: BTreeMap<String, usize>,
}

impl GapTally {
    pub fn record(&mut self, m: &OccupationMatch) {
        let distinct: BTreeSet<&String> = m.missing_ids.iter().collect();
        for id in distinct {
            *self.counts.entry(id.clone()).or_insert(0) += 1;
        }
    }

    /// Ranked by count, descending; equal counts stay in skill id order.
    pub fn into_ranked(self, skills: &BTreeMap<String, String>) -> Vec<SkillGap> {
        let mut gaps: Vec<SkillGap> = self
            .counts
            .into_iter()
            .map(|(skill_id, count)| SkillGap {
                skill_name: skill_label(skills, &skill_id).to_string(),
                skill_id,
                count,
            })
            .collect();
        gaps.sort_by(|a, b| b.count.cmp(&a.count));
        gaps
    }
}

/// Aggregates the missing sets of every match in one run.
pub fn aggregate_gaps(
    matches: &[OccupationMatch],
    skills: &BTreeMap<String, String>,
) -> Vec<SkillGap> {
    let mut tally = GapTally::default();
    for m in matches {
        tally.record(m);
    }
    tally.into_ranked(skills)
}
