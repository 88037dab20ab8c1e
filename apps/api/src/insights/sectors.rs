//! Sector breakdown: buckets the best matches by keywords in the occupation
//! name. Keywords of four or more characters match anywhere inside a token
//! (Swedish compounds such as "systemutvecklare"); shorter ones ("it", "pr")
//! must be the whole token.

use serde::{Deserialize, Serialize};

use crate::analysis::scorer::OccupationMatch;

/// Only the top matches are bucketed.
pub const SECTOR_SAMPLE: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    MediaMarketing,
    ItTech,
    LeadershipStrategy,
    CultureCreative,
    LogisticsTransport,
    Other,
}

// First hit wins, so order matters.
const SECTOR_KEYWORDS: &[(Sector, &[&str])] = &[
    (
        Sector::MediaMarketing,
        &["marknad", "ads", "seo", "kommunikation", "pr", "marketing", "communication"],
    ),
    (
        Sector::ItTech,
        &[
            "it",
            "system",
            "data",
            "utvecklare",
            "mjukvara",
            "programmerare",
            "developer",
            "software",
            "programmer",
        ],
    ),
    (
        Sector::LeadershipStrategy,
        &["chef", "ledare", "manager", "koordinator", "coordinator", "director"],
    ),
    (
        Sector::CultureCreative,
        &["konst", "grafisk", "design", "kultur", "museum", "art", "graphic", "culture"],
    ),
    (
        Sector::LogisticsTransport,
        &["logistik", "transport", "lager", "spedition", "logistics", "warehouse"],
    ),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorShare {
    pub sector: Sector,
    pub occupations: usize,
    /// Sum of match scores × 100.
    pub weight: f64,
}

pub fn classify_occupation(name: &str) -> Sector {
    let lower = name.to_lowercase();
    let tokens: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    SECTOR_KEYWORDS
        .iter()
        .find(|(_, keywords)| {
            keywords.iter().any(|kw| {
                tokens.iter().any(|token| {
                    if kw.chars().count() >= 4 {
                        token.contains(kw)
                    } else {
                        token == kw
                    }
                })
            })
        })
        .map(|(sector, _)| *sector)
        .unwrap_or(Sector::Other)
}

/// Sectors with at least one occupation, heaviest first.
pub fn sector_breakdown(matches: &[OccupationMatch]) -> Vec<SectorShare> {
    let mut shares: Vec<SectorShare> = Vec::new();

    for m in matches.iter().take(SECTOR_SAMPLE) {
        let sector = classify_occupation(&m.name);
        match shares.iter_mut().find(|s| s.sector == sector) {
            Some(share) => {
                share.occupations += 1;
                share.weight += m.score * 100.0;
            }
            None => shares.push(SectorShare {
                sector,
                occupations: 1,
                weight: m.score * 100.0,
            }),
        }
    }

    shares.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    shares
}
