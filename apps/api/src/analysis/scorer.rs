//! Match scoring: requirement coverage per occupation.
//!
//! score = |detected ∩ requirements| / |requirements|
//!
//! This is recall against the occupation's requirement set, not a symmetric
//! similarity: extra detected skills the job does not ask for neither raise
//! nor lower the score. Occupations with no requirements, or with zero hits,
//! are left out of the result entirely.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::taxonomy::builder::{occupation_label, skill_label};
use crate::taxonomy::models::RequirementRelation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupationMatch {
    pub id: String,
    pub name: String,
    /// 0.0 – 1.0
    pub score: f64,
    pub hits: Vec<String>,
    pub missing: Vec<String>,
    pub hit_ids: Vec<String>,
    pub missing_ids: Vec<String>,
}

/// Scores every relation against the detected skill ids. Sorted by score,
/// descending; the sort is stable so ties keep relation order.
pub fn score_matches(
    detected: &HashSet<String>,
    relations: &[RequirementRelation],
    occupations: &BTreeMap<String, String>,
    skills: &BTreeMap<String, String>,
) -> Vec<OccupationMatch> {
    let mut matches: Vec<OccupationMatch> = relations
        .iter()
        .filter_map(|relation| score_relation(detected, relation, occupations, skills))
        .collect();

    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches
}

fn score_relation(
    detected: &HashSet<String>,
    relation: &RequirementRelation,
    occupations: &BTreeMap<String, String>,
    skills: &BTreeMap<String, String>,
) -> Option<OccupationMatch> {
    let requirements = &relation.requirement_skill_ids;
    if requirements.is_empty() {
        return None;
    }

    let (hit_ids, missing_ids): (Vec<String>, Vec<String>) = requirements
        .iter()
        .cloned()
        .partition(|id| detected.contains(id));
    if hit_ids.is_empty() {
        return None;
    }

    let names = |ids: &[String]| -> Vec<String> {
        ids.iter()
            .map(|id| skill_label(skills, id).to_string())
            .collect()
    };

    Some(OccupationMatch {
        id: relation.occupation_id.clone(),
        name: occupation_label(occupations, &relation.occupation_id).to_string(),
        score: hit_ids.len() as f64 / requirements.len() as f64,
        hits: names(&hit_ids),
        missing: names(&missing_ids),
        hit_ids,
        missing_ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::models::{UNKNOWN_OCCUPATION, UNKNOWN_SKILL};
    use std::collections::BTreeSet;

    fn relation(occupation: &str, reqs: &[&str]) -> RequirementRelation {
        RequirementRelation {
            occupation_id: occupation.to_string(),
            requirement_skill_ids: reqs.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn detected(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn skills() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("1".to_string(), "Python".to_string()),
            ("2".to_string(), "SQL".to_string()),
            ("3".to_string(), "Statistics".to_string()),
        ])
    }

    fn occupations() -> BTreeMap<String, String> {
        BTreeMap::from([("J1".to_string(), "Data analyst".to_string())])
    }

    #[test]
    fn test_two_of_three_requirements() {
        let matches = score_matches(
            &detected(&["1", "2"]),
            &[relation("J1", &["1", "2", "3"])],
            &occupations(),
            &skills(),
        );
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert!((m.score - 2.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(m.hits, vec!["Python", "SQL"]);
        assert_eq!(m.missing, vec!["Statistics"]);
        assert_eq!(m.name, "Data analyst");
    }

    #[test]
    fn test_zero_hit_relation_is_excluded() {
        let matches = score_matches(
            &detected(&["9"]),
            &[relation("J1", &["1", "2"])],
            &occupations(),
            &skills(),
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn test_empty_requirement_set_is_excluded() {
        let matches = score_matches(
            &detected(&["1"]),
            &[relation("J1", &[])],
            &occupations(),
            &skills(),
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn test_extra_detected_skills_do_not_change_score() {
        let rels = [relation("J1", &["1", "2"])];
        let narrow = score_matches(&detected(&["1"]), &rels, &occupations(), &skills());
        let broad = score_matches(
            &detected(&["1", "7", "8", "9"]),
            &rels,
            &occupations(),
            &skills(),
        );
        assert_eq!(narrow[0].score, broad[0].score);
        assert_eq!(narrow[0].score, 0.5);
    }

    #[test]
    fn test_sorted_descending_and_ties_keep_relation_order() {
        let rels = [
            relation("A", &["1", "2"]),
            relation("B", &["1"]),
            relation("C", &["1", "3"]),
        ];
        let matches = score_matches(&detected(&["1"]), &rels, &BTreeMap::new(), &skills());
        let order: Vec<&str> = matches.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(order, vec!["B", "A", "C"]);

        let again = score_matches(&detected(&["1"]), &rels, &BTreeMap::new(), &skills());
        assert_eq!(matches, again);
    }

    #[test]
    fn test_unmapped_ids_use_placeholders() {
        let matches = score_matches(
            &detected(&["1"]),
            &[relation("JX", &["1", "42"])],
            &BTreeMap::new(),
            &skills(),
        );
        assert_eq!(matches[0].name, UNKNOWN_OCCUPATION);
        assert_eq!(matches[0].missing, vec![UNKNOWN_SKILL]);
    }

    #[test]
    fn test_hits_and_missing_partition_requirements() {
        let rel = relation("J1", &["1", "2", "3", "4"]);
        let matches = score_matches(
            &detected(&["2", "4", "5"]),
            &[rel.clone()],
            &occupations(),
            &skills(),
        );
        let m = &matches[0];

        let hits: BTreeSet<String> = m.hit_ids.iter().cloned().collect();
        let missing: BTreeSet<String> = m.missing_ids.iter().cloned().collect();
        assert!(hits.is_subset(&rel.requirement_skill_ids));
        assert!(hits.is_disjoint(&missing));
        let union: BTreeSet<String> = hits.union(&missing).cloned().collect();
        assert_eq!(union, rel.requirement_skill_ids);
        assert_eq!(m.score, hits.len() as f64 / rel.requirement_skill_ids.len() as f64);
        assert!((0.0..=1.0).contains(&m.score));
    }

    #[test]
    fn test_full_coverage_scores_one() {
        let matches = score_matches(
            &detected(&["1", "2", "3"]),
            &[relation("J1", &["1", "2", "3"])],
            &occupations(),
            &skills(),
        );
        assert_eq!(matches[0].score, 1.0);
        assert!(matches[0].missing.is_empty());
    }
}
