//! Analysis pipeline: one candidate text in, one report out.
//!
//! detect → score → aggregate gaps → insights. Everything mutable here is
//! local to the call; the taxonomy and detector are only read.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::analysis::detector::{DetectedSkill, SkillDetector};
use crate::analysis::gaps::{aggregate_gaps, SkillGap};
use crate::analysis::scorer::{score_matches, OccupationMatch};
use crate::insights::depth::{assess_depth, SkillDepth};
use crate::insights::roadmap::{build_roadmap, RoadmapStep};
use crate::insights::sectors::{sector_breakdown, SectorShare};
use crate::taxonomy::Taxonomy;

/// Output trimming. Gaps, roadmap and sectors are always computed over the
/// full match list; these limits only shorten what is returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    pub top_matches: Option<usize>,
    pub top_gaps: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisTotals {
    pub detected: usize,
    pub matches: usize,
    pub gaps: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub detected: Vec<DetectedSkill>,
    pub matches: Vec<OccupationMatch>,
    pub gaps: Vec<SkillGap>,
    pub depth: Vec<SkillDepth>,
    pub roadmap: Vec<RoadmapStep>,
    pub sectors: Vec<SectorShare>,
    pub totals: AnalysisTotals,
}

pub fn analyze(
    text: &str,
    taxonomy: &Taxonomy,
    detector: &SkillDetector,
    options: &AnalysisOptions,
) -> AnalysisReport {
    let text_lower = text.to_lowercase();

    let detected = detector.detect(&text_lower);
    let detected_ids: HashSet<String> = detected.iter().map(|d| d.id.clone()).collect();

    let mut matches = score_matches(
        &detected_ids,
        taxonomy.relations(),
        taxonomy.occupations(),
        taxonomy.skills(),
    );
    let mut gaps = aggregate_gaps(&matches, taxonomy.skills());

    let depth = assess_depth(&detected, &text_lower);
    let roadmap = build_roadmap(&gaps, taxonomy);
    let sectors = sector_breakdown(&matches);

    let totals = AnalysisTotals {
        detected: detected.len(),
        matches: matches.len(),
        gaps: gaps.len(),
    };
    debug!(
        "Analysis: {} skills detected, {} matches, {} gaps",
        totals.detected, totals.matches, totals.gaps
    );

    if let Some(n) = options.top_matches {
        matches.truncate(n);
    }
    if let Some(n) = options.top_gaps {
        gaps.truncate(n);
    }

    AnalysisReport {
        analysis_id: Uuid::new_v4(),
        analyzed_at: Utc::now(),
        detected,
        matches,
        gaps,
        depth,
        roadmap,
        sectors,
        totals,
    }
}
