//! Skill detection: whole-word, case-insensitive label lookup in candidate
//! text. No stemming, no fuzzy matching: "art" never fires inside "party".

use std::collections::BTreeMap;

use regex::{RegexSet, RegexSetBuilder};
use serde::{Deserialize, Serialize};

/// Labels shorter than this are never detected (too many false hits).
pub const MIN_LABEL_CHARS: usize = 3;

// A full taxonomy compiles to one large automaton; the crate defaults are
// sized for single patterns.
const SET_SIZE_LIMIT: usize = 256 << 20;
const SET_DFA_SIZE_LIMIT: usize = 64 << 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedSkill {
    pub id: String,
    pub name: String,
}

/// Word-boundary patterns for every detectable skill label, compiled into a
/// single set so one pass over the text reports every label found.
/// Built once per taxonomy and shared read-only between requests.
#[derive(Debug)]
pub struct SkillDetector {
    set: RegexSet,
    /// Indexed like the patterns in `set`.
    skills: Vec<DetectedSkill>,
}

impl SkillDetector {
    pub fn new(skills: &BTreeMap<String, String>) -> Result<Self, regex::Error> {
        let mut patterns = Vec::with_capacity(skills.len());
        let mut detectable = Vec::with_capacity(skills.len());
        for (id, label) in skills {
            if label.chars().count() < MIN_LABEL_CHARS {
                continue;
            }
            // `\b` needs a word character on the inside, so a label that
            // starts or ends with a symbol ("C#", "C++", ".NET") never matches.
            patterns.push(format!(r"\b{}\b", regex::escape(label)));
            detectable.push(DetectedSkill {
                id: id.clone(),
                name: label.clone(),
            });
        }

        let set = RegexSetBuilder::new(&patterns)
            .case_insensitive(true)
            .size_limit(SET_SIZE_LIMIT)
            .dfa_size_limit(SET_DFA_SIZE_LIMIT)
            .build()?;
        Ok(Self {
            set,
            skills: detectable,
        })
    }

    /// Number of detectable labels.
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Skills whose label occurs as a whole word in `text`, ordered by id.
    pub fn detect(&self, text: &str) -> Vec<DetectedSkill> {
        self.set
            .matches(text)
            .into_iter()
            .map(|i| self.skills[i].clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect_skills(text: &str, skills: &BTreeMap<String, String>) -> Vec<DetectedSkill> {
        SkillDetector::new(skills).unwrap().detect(text)
    }

    fn skills(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(id, label)| (id.to_string(), label.to_string()))
            .collect()
    }

    fn ids(found: &[DetectedSkill]) -> Vec<&str> {
        found.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_detects_python_and_sql() {
        let map = skills(&[("1", "Python"), ("2", "SQL")]);
        let found = detect_skills("I know Python and SQL well", &map);
        assert_eq!(ids(&found), vec!["1", "2"]);
        assert_eq!(found[0].name, "Python");
    }

    #[test]
    fn test_partial_token_does_not_match() {
        let map = skills(&[("a", "Art")]);
        assert!(detect_skills("we threw a party", &map).is_empty());
        assert_eq!(ids(&detect_skills("modern art, mostly", &map)), vec!["a"]);
    }

    #[test]
    fn test_short_labels_are_never_detected() {
        let map = skills(&[("r", "R"), ("go", "Go"), ("ux", "UX")]);
        assert!(detect_skills("r go ux R Go UX", &map).is_empty());
        assert!(SkillDetector::new(&map).unwrap().is_empty());
    }

    #[test]
    fn test_three_char_label_is_detected() {
        let map = skills(&[("c", "CSS")]);
        assert_eq!(ids(&detect_skills("html/css", &map)), vec!["c"]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // "Öl" is two characters but three bytes.
        let map = skills(&[("o", "Öl")]);
        assert!(detect_skills("öl", &map).is_empty());
    }

    #[test]
    fn test_multi_word_and_non_ascii_labels() {
        let map = skills(&[
            ("pm", "Projektledning"),
            ("ml", "Machine learning"),
            ("sv", "Svetsning"),
        ]);
        let found = detect_skills(
            "Erfarenhet av projektledning och machine learning. Svetsningen var kul.",
            &map,
        );
        assert_eq!(ids(&found), vec!["ml", "pm"]);
    }

    #[test]
    fn test_regex_metacharacters_are_escaped() {
        let map = skills(&[("n", "Node.js"), ("x", "Nodexjs")]);
        assert_eq!(ids(&detect_skills("built with node.js", &map)), vec!["n"]);
    }

    #[test]
    fn test_labels_edged_by_symbols_are_not_detected() {
        let map = skills(&[("cs", "C#"), ("cpp", "C++"), ("net", ".NET"), ("js", "Node.js")]);
        let found = detect_skills("i write c# and c++ on .net daily, node.js too", &map);
        assert_eq!(ids(&found), vec!["js"]);
    }

    #[test]
    fn test_mixed_case_label_matches_any_case() {
        let map = skills(&[("1", "PostgreSQL")]);
        assert_eq!(ids(&detect_skills("POSTGRESQL and postgresql", &map)), vec!["1"]);
    }

    #[test]
    fn test_many_labels_in_one_pass() {
        let map: BTreeMap<String, String> = (0..2000)
            .map(|i| (format!("{i:05}"), format!("skill{i}")))
            .collect();
        let detector = SkillDetector::new(&map).unwrap();
        assert_eq!(detector.len(), 2000);
        let found = detector.detect("knows skill7 and skill1999 but not skill20000");
        assert_eq!(ids(&found), vec!["00007", "01999"]);
    }

    #[test]
    fn test_each_skill_reported_once() {
        let map = skills(&[("1", "Python")]);
        let found = detect_skills("python python PYTHON", &map);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_empty_text_detects_nothing() {
        let map = skills(&[("1", "Python")]);
        assert!(detect_skills("", &map).is_empty());
    }
}
