//! Practice-set and question records.
//!
//! Input records use the camelCase field names of the dashboard's data feed;
//! derived records produced by the pipeline serialize in snake_case like the
//! rest of the API payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Difficulty;

crate::define_id_type!(SetId);
crate::define_id_type!(QuestionId);

/// One answered-or-unanswered practice question, as stored on its set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub topic: String,
    #[serde(default)]
    pub subtopic: String,
    pub difficulty: Difficulty,
    pub correct: bool,
    #[serde(default)]
    pub partially_correct: bool,
    #[serde(default)]
    pub answered: bool,
    /// Seconds spent on the question.
    #[serde(default)]
    pub time_spent: u32,
}

/// One completed or in-progress practice session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeSet {
    pub id: SetId,
    pub subject: String,
    #[serde(rename = "type")]
    pub set_type: String,
    pub date_completed: DateTime<Utc>,
    /// Informational accuracy reported with the set (0-100). The matrix
    /// recomputes accuracy from question flags and never reads this.
    pub accuracy: u8,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl PracticeSet {
    /// Display title, e.g. `"Math Full Test (2024-03-02)"`.
    pub fn title(&self) -> String {
        format!(
            "{} {} ({})",
            self.subject,
            self.set_type,
            self.date_completed.format("%Y-%m-%d")
        )
    }

    /// Accuracy recomputed from the question flags, rounded like every
    /// other matrix percentage.
    pub fn question_accuracy(&self) -> u8 {
        let correct = self.questions.iter().filter(|q| q.correct).count();
        crate::services::matrix::accuracy_percent(correct, self.questions.len())
    }
}

/// A question annotated with its owning set, as produced by the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatQuestion {
    pub id: QuestionId,
    pub topic: String,
    pub subtopic: String,
    pub difficulty: Difficulty,
    pub correct: bool,
    pub partially_correct: bool,
    pub answered: bool,
    pub time_spent: u32,
    pub set_id: SetId,
    pub subject: String,
    pub set_title: String,
}

impl FlatQuestion {
    /// Attach set linkage to a raw question.
    pub fn from_question(question: &Question, set: &PracticeSet, set_title: &str) -> Self {
        Self {
            id: question.id.clone(),
            topic: question.topic.clone(),
            subtopic: question.subtopic.clone(),
            difficulty: question.difficulty,
            correct: question.correct,
            partially_correct: question.partially_correct,
            answered: question.answered,
            time_spent: question.time_spent,
            set_id: set.id.clone(),
            subject: set.subject.clone(),
            set_title: set_title.to_string(),
        }
    }
}
