use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{QuestionId, QuizId};

/// One answered question in a submission payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSelection {
    pub question_id: QuestionId,
    pub selected_option: String,
}

/// Request body for scoring a finished (or partially finished) quiz.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizSubmission {
    pub quiz_id: QuizId,
    pub answers: Vec<AnswerSelection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Per-question verdict in a scored submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub question_id: QuestionId,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub explanation: String,
}

/// The backend-owned scoring result. The client only displays it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredSubmission {
    pub quiz_id: QuizId,
    /// Percentage in [0, 100].
    pub score: f64,
    pub correct_answers: u32,
    pub total_questions: u32,
    pub results: Vec<QuestionResult>,
    pub performance_feedback: String,
    #[serde(default)]
    pub suggested_topics: Vec<String>,
}

impl ScoredSubmission {
    #[must_use]
    pub fn incorrect_answers(&self) -> u32 {
        self.total_questions.saturating_sub(self.correct_answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_omits_absent_completed_at() {
        let submission = QuizSubmission {
            quiz_id: QuizId::new("quiz-1"),
            answers: vec![AnswerSelection {
                question_id: QuestionId::new("q1"),
                selected_option: "Cambridge".to_string(),
            }],
            completed_at: None,
        };
        let json = serde_json::to_string(&submission).unwrap();
        assert!(!json.contains("completed_at"));
        assert!(json.contains("\"selected_option\":\"Cambridge\""));
    }

    #[test]
    fn scored_submission_deserializes_wire_shape() {
        let json = r#"{
            "quiz_id": "quiz-1",
            "score": 75.0,
            "correct_answers": 6,
            "total_questions": 8,
            "results": [{
                "question_id": "q1",
                "user_answer": "Cambridge",
                "correct_answer": "Cambridge",
                "is_correct": true,
                "explanation": "He studied at King's College, Cambridge."
            }],
            "performance_feedback": "Great job!",
            "suggested_topics": ["Enigma machine", "Computability theory"]
        }"#;
        let scored: ScoredSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(scored.correct_answers, 6);
        assert_eq!(scored.incorrect_answers(), 2);
        assert!(scored.results[0].is_correct);
    }
}
