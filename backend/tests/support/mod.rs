#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use chrono::{TimeZone, Utc};
use practice_review::models::{Difficulty, PracticeSet, Question, QuestionId, SetId};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores variables on unwind and serializes access to process-global env
/// vars across parallel tests.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Question with sensible defaults for the fields a test does not care about.
pub fn question(id: &str, topic: &str, difficulty: Difficulty, correct: bool) -> Question {
    Question {
        id: QuestionId::new(id),
        topic: topic.to_string(),
        subtopic: String::new(),
        difficulty,
        correct,
        partially_correct: false,
        answered: true,
        time_spent: 45,
    }
}

/// Practice set completed on 2024-03-01 plus `day_offset` days.
pub fn practice_set(id: &str, subject: &str, day_offset: u32, questions: Vec<Question>) -> PracticeSet {
    PracticeSet {
        id: SetId::new(id),
        subject: subject.to_string(),
        set_type: "Drill".to_string(),
        date_completed: Utc
            .with_ymd_and_hms(2024, 3, 1 + day_offset, 9, 30, 0)
            .unwrap(),
        accuracy: 0,
        questions,
    }
}
