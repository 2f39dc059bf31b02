//! Narrative keyword classification: which optional object groups to add.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::schema::scene::TimeOfDay;

#[derive(Debug, Error)]
pub enum KeywordError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Keyword sets for each optional group. A group triggers when the
/// lower-cased narrative contains any of its keywords as a substring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSets {
    #[serde(default)]
    pub trees: FxHashSet<String>,
    #[serde(default)]
    pub water: FxHashSet<String>,
    #[serde(default)]
    pub structures: FxHashSet<String>,
    #[serde(default)]
    pub stars: FxHashSet<String>,
}

fn set_of(words: &[&str]) -> FxHashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for KeywordSets {
    fn default() -> Self {
        Self {
            trees: set_of(&["forest", "tree", "nature", "park", "meadow"]),
            water: set_of(&["lake", "ocean", "sea", "river", "rain", "water"]),
            structures: set_of(&[
                "temple", "ruin", "house", "city", "tower", "bridge", "pillar", "monolith",
            ]),
            stars: set_of(&["star"]),
        }
    }
}

/// Which optional groups a narrative asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Triggers {
    pub trees: bool,
    pub water: bool,
    pub structures: bool,
    pub stars: bool,
}

impl Triggers {
    pub fn any(&self) -> bool {
        self.trees || self.water || self.structures || self.stars
    }

    /// Names of the active groups, in scene order.
    pub fn active(&self) -> Vec<&'static str> {
        [
            ("trees", self.trees),
            ("structures", self.structures),
            ("water", self.water),
            ("stars", self.stars),
        ]
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
        .collect()
    }
}

impl KeywordSets {
    /// Parse keyword sets from a RON string. Missing groups are empty.
    pub fn parse_ron(input: &str) -> Result<Self, KeywordError> {
        let mut sets: KeywordSets = ron::from_str(input)?;
        sets.normalize();
        Ok(sets)
    }

    pub fn load_from_ron(path: &Path) -> Result<Self, KeywordError> {
        let contents = std::fs::read_to_string(path)?;
        let sets = Self::parse_ron(&contents)?;
        tracing::info!(
            path = %path.display(),
            trees = sets.trees.len(),
            water = sets.water.len(),
            structures = sets.structures.len(),
            stars = sets.stars.len(),
            "loaded keyword sets"
        );
        Ok(sets)
    }

    /// Lower-case every keyword and drop empty ones, which would match
    /// every narrative.
    fn normalize(&mut self) {
        for set in [
            &mut self.trees,
            &mut self.water,
            &mut self.structures,
            &mut self.stars,
        ] {
            *set = set
                .drain()
                .map(|k| k.to_lowercase())
                .filter(|k| !k.is_empty())
                .collect();
        }
    }

    /// Classify a narrative. Stars also trigger at night regardless of text.
    pub fn classify(&self, narrative: &str, time_of_day: TimeOfDay) -> Triggers {
        let text = narrative.to_lowercase();
        Triggers {
            trees: mentions_any(&text, &self.trees),
            water: mentions_any(&text, &self.water),
            structures: mentions_any(&text, &self.structures),
            stars: mentions_any(&text, &self.stars) || time_of_day == TimeOfDay::Night,
        }
    }
}

fn mentions_any(text: &str, keywords: &FxHashSet<String>) -> bool {
    keywords.iter().any(|k| text.contains(k.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Triggers {
        KeywordSets::default().classify(text, TimeOfDay::Day)
    }

    #[test]
    fn temple_by_a_lake() {
        let t = classify("a temple by a lake");
        assert!(t.structures);
        assert!(t.water);
        assert!(!t.trees);
        assert!(!t.stars);
    }

    #[test]
    fn no_keywords_no_groups() {
        let t = classify("an empty room with a chair");
        assert_eq!(t, Triggers::default());
        assert!(!t.any());
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(classify("The FOREST whispers").trees);
        assert!(classify("Starlight").stars);
    }

    #[test]
    fn matching_is_substring_not_token() {
        // "streets" contains "tree", "seat" contains "sea".
        assert!(classify("empty streets").trees);
        assert!(classify("a worn seat").water);
        assert!(classify("drained").water);
    }

    #[test]
    fn night_forces_stars() {
        let sets = KeywordSets::default();
        assert!(sets.classify("nothing here", TimeOfDay::Night).stars);
        assert!(!sets.classify("nothing here", TimeOfDay::Dusk).stars);
    }

    #[test]
    fn all_groups_at_once() {
        let t = classify("forest ocean temple star");
        assert!(t.trees && t.water && t.structures && t.stars);
        assert_eq!(t.active(), ["trees", "structures", "water", "stars"]);
    }

    #[test]
    fn parse_ron_partial_sets() {
        let sets = KeywordSets::parse_ron(r#"(trees: ["Willow", ""], stars: ["comet"])"#).unwrap();
        assert!(sets.trees.contains("willow"));
        assert_eq!(sets.trees.len(), 1);
        assert!(sets.water.is_empty());
        let t = sets.classify("a willow under a comet by the sea", TimeOfDay::Day);
        assert!(t.trees && t.stars);
        assert!(!t.water);
    }

    #[test]
    fn parse_ron_rejects_garbage() {
        assert!(matches!(
            KeywordSets::parse_ron("trees = forest"),
            Err(KeywordError::Ron(_))
        ));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = KeywordSets::load_from_ron(Path::new("does/not/exist.ron"));
        assert!(matches!(result, Err(KeywordError::Io(_))));
    }
}
