use quiz_core::model::{Difficulty, Quiz, QuizId};

use crate::vm::time_fmt::format_date;

/// One row in the quiz history listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryCardVm {
    pub id: QuizId,
    pub title: String,
    pub summary: String,
    pub question_count: usize,
    pub generated_at_str: String,
    pub badge: Difficulty,
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl From<&Quiz> for HistoryCardVm {
    fn from(quiz: &Quiz) -> Self {
        let dist = quiz.difficulty_distribution;
        Self {
            id: quiz.id.clone(),
            title: quiz.title.clone(),
            summary: quiz.summary.clone(),
            question_count: quiz.question_count(),
            generated_at_str: format_date(quiz.generated_at),
            badge: dist.dominant(),
            easy: dist.easy,
            medium: dist.medium,
            hard: dist.hard,
        }
    }
}

#[must_use]
pub fn map_history_cards(quizzes: &[Quiz]) -> Vec<HistoryCardVm> {
    quizzes.iter().map(HistoryCardVm::from).collect()
}

/// CSS hook for a difficulty chip.
#[must_use]
pub fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "chip chip-easy",
        Difficulty::Medium => "chip chip-medium",
        Difficulty::Hard => "chip chip-hard",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::DifficultyDistribution;

    fn quiz_fixture() -> Quiz {
        serde_json::from_str(
            r#"{
                "id": "quiz-1",
                "url": "https://en.wikipedia.org/wiki/Alan_Turing",
                "title": "Alan Turing",
                "summary": "British mathematician.",
                "quiz": [],
                "generated_at": "2026-08-29T12:00:00Z",
                "difficulty_distribution": { "easy": 2, "medium": 5, "hard": 0 }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn card_carries_badge_and_formatted_date() {
        let card = HistoryCardVm::from(&quiz_fixture());
        assert_eq!(card.badge, Difficulty::Medium);
        assert_eq!(card.generated_at_str, "Aug 29, 2026");
        assert_eq!(card.medium, 5);
    }

    #[test]
    fn map_preserves_order() {
        let mut second = quiz_fixture();
        second.id = QuizId::new("quiz-2");
        second.difficulty_distribution = DifficultyDistribution {
            easy: 0,
            medium: 0,
            hard: 3,
        };
        let cards = map_history_cards(&[quiz_fixture(), second]);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, QuizId::new("quiz-1"));
        assert_eq!(cards[1].badge, Difficulty::Hard);
    }
}
