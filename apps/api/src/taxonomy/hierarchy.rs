//! Hierarchy resolver: one hop up the "broader concept" edges, bridging a
//! narrow skill atom (e.g. "Google Ads") to its general category.

use std::collections::{BTreeMap, HashMap};

use crate::taxonomy::builder::{skill_label, Taxonomy};
use crate::taxonomy::models::BroaderSkill;

/// Immediate parents of `skill_id`, in snapshot order. A skill without a
/// recorded edge (or an unknown id) yields an empty list.
pub fn resolve_broader(
    skill_id: &str,
    hierarchy: &HashMap<String, Vec<String>>,
    skills: &BTreeMap<String, String>,
) -> Vec<BroaderSkill> {
    hierarchy
        .get(skill_id)
        .map(|parents| {
            parents
                .iter()
                .filter(|parent| parent.as_str() != skill_id)
                .map(|parent| BroaderSkill {
                    id: parent.clone(),
                    label: skill_label(skills, parent).to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

impl Taxonomy {
    pub fn broader_of(&self, skill_id: &str) -> Vec<BroaderSkill> {
        resolve_broader(skill_id, self.hierarchy(), self.skills())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::models::UNKNOWN_SKILL;

    fn fixture() -> (HashMap<String, Vec<String>>, BTreeMap<String, String>) {
        let hierarchy = HashMap::from([(
            "ads".to_string(),
            vec!["mkt".to_string(), "ghost".to_string()],
        )]);
        let skills = BTreeMap::from([
            ("ads".to_string(), "Google Ads".to_string()),
            ("mkt".to_string(), "Marketing".to_string()),
        ]);
        (hierarchy, skills)
    }

    #[test]
    fn test_returns_parents_with_labels() {
        let (hierarchy, skills) = fixture();
        let parents = resolve_broader("ads", &hierarchy, &skills);
        assert_eq!(parents.len(), 2);
        assert_eq!(parents[0].label, "Marketing");
        assert_eq!(parents[1].label, UNKNOWN_SKILL);
    }

    #[test]
    fn test_skill_without_edge_returns_empty() {
        let (hierarchy, skills) = fixture();
        assert!(resolve_broader("mkt", &hierarchy, &skills).is_empty());
        assert!(resolve_broader("missing", &hierarchy, &skills).is_empty());
    }

    #[test]
    fn test_self_edge_is_never_returned() {
        let hierarchy = HashMap::from([("a".to_string(), vec!["a".to_string()])]);
        assert!(resolve_broader("a", &hierarchy, &BTreeMap::new()).is_empty());
    }
}
