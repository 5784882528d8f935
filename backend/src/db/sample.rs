//! Deterministic sample practice sets.
//!
//! Used by the `sample` repository type, the CLI default and tests. The data
//! covers three subjects, four topics each and all difficulties, with a
//! fixed correctness pattern so aggregates are reproducible.

use chrono::{Duration, TimeZone, Utc};

use crate::models::{Difficulty, PracticeSet, Question, QuestionId, SetId};

const QUESTIONS_PER_SET: usize = 12;
const SETS_PER_SUBJECT: usize = 3;

struct SubjectCatalog {
    subject: &'static str,
    topics: [(&'static str, [&'static str; 2]); 4],
}

const CATALOG: [SubjectCatalog; 3] = [
    SubjectCatalog {
        subject: "Math",
        topics: [
            ("Algebra", ["Linear Equations", "Systems of Equations"]),
            ("Geometry", ["Triangles", "Circles"]),
            ("Statistics", ["Probability", "Data Interpretation"]),
            ("Advanced Math", ["Quadratics", "Exponential Functions"]),
        ],
    },
    SubjectCatalog {
        subject: "Reading",
        topics: [
            ("Inference", ["Implicit Meaning", "Author Intent"]),
            ("Main Idea", ["Central Claim", "Summary"]),
            ("Vocabulary", ["Words in Context", "Connotation"]),
            ("Evidence", ["Textual Evidence", "Quantitative Evidence"]),
        ],
    },
    SubjectCatalog {
        subject: "Writing",
        topics: [
            ("Grammar", ["Subject-Verb Agreement", "Verb Tense"]),
            ("Punctuation", ["Commas", "Semicolons"]),
            ("Transitions", ["Logical Flow", "Contrast"]),
            ("Rhetorical Synthesis", ["Purpose", "Audience"]),
        ],
    },
];

const SET_TYPES: [&str; SETS_PER_SUBJECT] = ["Full Test", "Topic Drill", "Timed Section"];

/// Built-in practice sets, ordered by completion date.
pub fn sample_practice_sets() -> Vec<PracticeSet> {
    let start = Utc
        .with_ymd_and_hms(2024, 1, 8, 9, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    let mut sets = Vec::with_capacity(CATALOG.len() * SETS_PER_SUBJECT);
    for round in 0..SETS_PER_SUBJECT {
        for (subject_idx, catalog) in CATALOG.iter().enumerate() {
            let set_idx = round * CATALOG.len() + subject_idx;
            let questions = sample_questions(catalog, set_idx);
            let accuracy = reported_accuracy(&questions);
            sets.push(PracticeSet {
                id: SetId::new(format!("set-{:02}", set_idx + 1)),
                subject: catalog.subject.to_string(),
                set_type: SET_TYPES[round].to_string(),
                date_completed: start + Duration::days(set_idx as i64 * 3),
                accuracy,
                questions,
            });
        }
    }
    sets
}

fn sample_questions(catalog: &SubjectCatalog, set_idx: usize) -> Vec<Question> {
    (0..QUESTIONS_PER_SET)
        .map(|q_idx| {
            let (topic, subtopics) = catalog.topics[(q_idx + set_idx) % catalog.topics.len()];
            let difficulty = Difficulty::ALL[(q_idx * 3 + set_idx) % Difficulty::ALL.len()];
            let rank = difficulty as usize;
            // harder questions are missed more often
            let correct = (set_idx * 7 + q_idx * 5 + rank * 2) % 10 < 8 - rank * 2;
            let partially_correct = !correct && (q_idx + set_idx) % 3 == 0;
            // the last question of every third set was skipped
            let answered = !(set_idx % 3 == 2 && q_idx == QUESTIONS_PER_SET - 1);

            Question {
                id: QuestionId::new(format!("q-{:02}", q_idx + 1)),
                topic: topic.to_string(),
                subtopic: subtopics[q_idx % 2].to_string(),
                difficulty,
                correct: correct && answered,
                partially_correct: partially_correct && answered,
                answered,
                time_spent: if answered {
                    (40 + (q_idx * 17 + set_idx * 11) % 110) as u32
                } else {
                    0
                },
            }
        })
        .collect()
}

/// Reported score gives half credit for partially-correct answers, so it
/// differs from the question-level accuracy the matrix computes.
fn reported_accuracy(questions: &[Question]) -> u8 {
    if questions.is_empty() {
        return 0;
    }
    let points: usize = questions
        .iter()
        .map(|q| {
            if q.correct {
                2
            } else if q.partially_correct {
                1
            } else {
                0
            }
        })
        .sum();
    ((points * 100 + questions.len()) / (2 * questions.len())) as u8
}
