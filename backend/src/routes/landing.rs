use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{PracticeSet, SetId};

/// Practice set summary for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeSetInfo {
    pub set_id: SetId,
    pub title: String,
    pub subject: String,
    pub set_type: String,
    pub date_completed: DateTime<Utc>,
    /// Accuracy as reported on the set.
    pub reported_accuracy: u8,
    /// Accuracy recomputed from the question flags.
    pub question_accuracy: u8,
    pub question_count: usize,
}

impl From<&PracticeSet> for PracticeSetInfo {
    fn from(set: &PracticeSet) -> Self {
        Self {
            set_id: set.id.clone(),
            title: set.title(),
            subject: set.subject.clone(),
            set_type: set.set_type.clone(),
            date_completed: set.date_completed,
            reported_accuracy: set.accuracy,
            question_accuracy: set.question_accuracy(),
            question_count: set.questions.len(),
        }
    }
}

/// Report name under which the [`PracticeSetInfo`] listing is served.
pub const SETS_REPORT: &str = "sets";
