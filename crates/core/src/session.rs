use std::collections::HashMap;

use crate::model::{AnswerSelection, Question, QuestionId};

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

/// Client-side state for taking one quiz: a cursor over the immutable
/// question sequence, the user's answer map, and a completion flag.
///
/// The session does not enforce linear progression: `go_to_question`
/// may jump to any index, answered or not. It also does not gate
/// submission on having every answer; that is a UI concern.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    questions: Vec<Question>,
    cursor: usize,
    answers: HashMap<QuestionId, String>,
    completed: bool,
}

impl QuizSession {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            cursor: 0,
            answers: HashMap::new(),
            completed: false,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Index of the question currently presented to the user.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// The question at the cursor. `None` only for an empty sequence.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.cursor)
    }

    /// Progress percentage `(cursor + 1) / total * 100`, reaching 100 only
    /// at the last question. 0 for an empty sequence.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.cursor as f64 + 1.0) / self.questions.len() as f64 * 100.0
    }

    #[must_use]
    pub fn answer_for(&self, id: &QuestionId) -> Option<&str> {
        self.answers.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn answers(&self) -> &HashMap<QuestionId, String> {
        &self.answers
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Whether the question at `index` has a recorded answer.
    #[must_use]
    pub fn is_answered(&self, index: usize) -> bool {
        self.questions
            .get(index)
            .is_some_and(|question| self.answers.contains_key(&question.id))
    }

    /// Whether the current question has a recorded answer. The UI uses
    /// this to gate the next/submit buttons.
    #[must_use]
    pub fn current_answered(&self) -> bool {
        self.is_answered(self.cursor)
    }

    /// Record (or overwrite) the user's choice for a question.
    ///
    /// Selections for ids not in the question sequence are ignored, so the
    /// answer map never holds a key outside the loaded quiz. The option
    /// string is not checked against the question's options; scoring is
    /// backend-authoritative.
    pub fn select_answer(&mut self, id: &QuestionId, option: impl Into<String>) {
        if self.questions.iter().any(|question| question.id == *id) {
            self.answers.insert(id.clone(), option.into());
        }
    }

    /// Advance the cursor, or mark the session complete when already at
    /// the last question. The cursor never moves past the last index.
    pub fn next_question(&mut self) {
        if self.cursor + 1 < self.questions.len() {
            self.cursor += 1;
        } else {
            self.completed = true;
        }
    }

    pub fn previous_question(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Jump to any question. Out-of-range indices are silently ignored.
    pub fn go_to_question(&mut self, index: usize) {
        if index < self.questions.len() {
            self.cursor = index;
        }
    }

    /// Back to the initial state, keeping the loaded questions.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.answers.clear();
        self.completed = false;
    }

    /// The answer map flattened in question order, for a deterministic
    /// submission payload. Unanswered questions are skipped.
    #[must_use]
    pub fn selections(&self) -> Vec<AnswerSelection> {
        self.questions
            .iter()
            .filter_map(|question| {
                self.answers
                    .get(&question.id)
                    .map(|selected| AnswerSelection {
                        question_id: question.id.clone(),
                        selected_option: selected.clone(),
                    })
            })
            .collect()
    }

    #[must_use]
    pub fn progress_view(&self) -> SessionProgress {
        let total = self.questions.len();
        let answered = self.answers.len();
        SessionProgress {
            total,
            answered,
            remaining: total.saturating_sub(answered),
            is_complete: self.completed,
        }
    }
}
