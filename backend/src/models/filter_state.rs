//! Filter state for the performance matrix.
//!
//! `FilterState` is an immutable value: every setter consumes the state and
//! returns the updated one, so the pipeline only ever sees a snapshot.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::Difficulty;

/// Performance bucket used by the performance filter.
///
/// The buckets are independent tests on a question, not a partition:
/// `Low` keeps incorrect answers, `Medium` keeps partially-correct answers and
/// `High` keeps correct answers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceBucket {
    Low,
    Medium,
    High,
}

impl PerformanceBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceBucket::Low => "low",
            PerformanceBucket::Medium => "medium",
            PerformanceBucket::High => "high",
        }
    }
}

impl fmt::Display for PerformanceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PerformanceBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!(
                "Invalid performance filter: {}. Must be 'low', 'medium', or 'high'",
                s
            )),
        }
    }
}

/// Current filter selection of the matrix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterState {
    pub filter_subject: Option<String>,
    /// Difficulty toggles. A difficulty missing from the map is treated as
    /// disabled.
    pub filter_difficulties: BTreeMap<Difficulty, bool>,
    pub filter_topics: Vec<String>,
    pub filter_performance: Option<PerformanceBucket>,
    pub topic_search_input: String,
}

impl Default for FilterState {
    /// No subject, every difficulty enabled, no topics, no performance
    /// bucket and an empty search.
    fn default() -> Self {
        Self {
            filter_subject: None,
            filter_difficulties: Difficulty::ALL.iter().map(|d| (*d, true)).collect(),
            filter_topics: Vec::new(),
            filter_performance: None,
            topic_search_input: String::new(),
        }
    }
}

impl FilterState {
    pub fn with_subject(mut self, subject: Option<String>) -> Self {
        self.filter_subject = subject;
        self
    }

    /// Replace the whole difficulty map. Keys left out are disabled.
    pub fn with_difficulties(mut self, difficulties: BTreeMap<Difficulty, bool>) -> Self {
        self.filter_difficulties = difficulties;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty, enabled: bool) -> Self {
        self.filter_difficulties.insert(difficulty, enabled);
        self
    }

    pub fn toggle_difficulty(self, difficulty: Difficulty) -> Self {
        let enabled = self.is_difficulty_active(difficulty);
        self.with_difficulty(difficulty, !enabled)
    }

    pub fn with_topics(mut self, topics: Vec<String>) -> Self {
        self.filter_topics = topics;
        self
    }

    /// Add the topic to the topic filter, or remove it if already present.
    pub fn toggle_topic(mut self, topic: &str) -> Self {
        if let Some(pos) = self.filter_topics.iter().position(|t| t == topic) {
            self.filter_topics.remove(pos);
        } else {
            self.filter_topics.push(topic.to_string());
        }
        self
    }

    pub fn with_performance(mut self, performance: Option<PerformanceBucket>) -> Self {
        self.filter_performance = performance;
        self
    }

    pub fn with_topic_search(mut self, search: impl Into<String>) -> Self {
        self.topic_search_input = search.into();
        self
    }

    /// Back to defaults.
    pub fn reset(self) -> Self {
        Self::default()
    }

    pub fn is_difficulty_active(&self, difficulty: Difficulty) -> bool {
        self.filter_difficulties
            .get(&difficulty)
            .copied()
            .unwrap_or(false)
    }

    /// Enabled difficulties in canonical column order.
    pub fn active_difficulties(&self) -> Vec<Difficulty> {
        Difficulty::ALL
            .iter()
            .copied()
            .filter(|d| self.is_difficulty_active(*d))
            .collect()
    }

    /// The trimmed search string, or `None` when the search box is blank.
    pub fn trimmed_search(&self) -> Option<&str> {
        let trimmed = self.topic_search_input.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = FilterState::default();
        assert_eq!(state.filter_subject, None);
        assert_eq!(state.active_difficulties(), Difficulty::ALL.to_vec());
        assert!(state.filter_topics.is_empty());
        assert_eq!(state.filter_performance, None);
        assert_eq!(state.topic_search_input, "");
    }

    #[test]
    fn test_setters_return_new_state() {
        let original = FilterState::default();
        let updated = original
            .clone()
            .with_subject(Some("Math".to_string()))
            .with_difficulty(Difficulty::Hard, false)
            .with_performance(Some(PerformanceBucket::Low));

        assert_eq!(original, FilterState::default());
        assert_eq!(updated.filter_subject.as_deref(), Some("Math"));
        assert_eq!(
            updated.active_difficulties(),
            vec![Difficulty::Easy, Difficulty::Medium, Difficulty::VeryHard]
        );
    }

    #[test]
    fn test_missing_difficulty_key_is_inactive() {
        let map: BTreeMap<Difficulty, bool> =
            [(Difficulty::Easy, true), (Difficulty::Medium, true)].into_iter().collect();
        let state = FilterState::default().with_difficulties(map);
        assert!(!state.is_difficulty_active(Difficulty::VeryHard));
        assert_eq!(
            state.active_difficulties(),
            vec![Difficulty::Easy, Difficulty::Medium]
        );
    }

    #[test]
    fn test_toggles() {
        let state = FilterState::default()
            .toggle_difficulty(Difficulty::Easy)
            .toggle_topic("Algebra")
            .toggle_topic("Geometry")
            .toggle_topic("Algebra");
        assert!(!state.is_difficulty_active(Difficulty::Easy));
        assert_eq!(state.filter_topics, vec!["Geometry".to_string()]);

        let state = state.toggle_difficulty(Difficulty::Easy);
        assert!(state.is_difficulty_active(Difficulty::Easy));
    }

    #[test]
    fn test_reset() {
        let state = FilterState::default()
            .with_subject(Some("Reading".to_string()))
            .with_topics(vec!["Inference".to_string()])
            .with_topic_search("inf")
            .reset();
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn test_trimmed_search() {
        assert_eq!(FilterState::default().with_topic_search("   ").trimmed_search(), None);
        assert_eq!(
            FilterState::default().with_topic_search("  alg ").trimmed_search(),
            Some("alg")
        );
    }

    #[test]
    fn test_performance_bucket_parse() {
        assert_eq!("LOW".parse::<PerformanceBucket>().unwrap(), PerformanceBucket::Low);
        assert_eq!(PerformanceBucket::High.to_string(), "high");
        let err = "best".parse::<PerformanceBucket>().unwrap_err();
        assert!(err.contains("Invalid performance filter"));
    }
}
