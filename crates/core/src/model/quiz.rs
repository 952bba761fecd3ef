use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Difficulty, Question, QuizId};

/// Named entities the backend extracted from the source article.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEntities {
    #[serde(default)]
    pub people: Vec<String>,
    #[serde(default)]
    pub organizations: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
}

/// How many questions of each difficulty the quiz contains.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyDistribution {
    #[serde(default)]
    pub easy: u32,
    #[serde(default)]
    pub medium: u32,
    #[serde(default)]
    pub hard: u32,
}

impl DifficultyDistribution {
    /// The single difficulty used to badge a quiz in listings: any hard
    /// question makes the quiz "hard", otherwise more medium than easy
    /// makes it "medium", otherwise "easy".
    #[must_use]
    pub fn dominant(self) -> Difficulty {
        if self.hard > 0 {
            Difficulty::Hard
        } else if self.medium > self.easy {
            Difficulty::Medium
        } else {
            Difficulty::Easy
        }
    }

    #[must_use]
    pub fn total(self) -> u32 {
        self.easy + self.medium + self.hard
    }
}

/// A generated quiz as returned by the backend, from generation or from a
/// history lookup. Immutable on the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: QuizId,
    /// Source Wikipedia article.
    pub url: String,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub key_entities: KeyEntities,
    #[serde(default)]
    pub sections: Vec<String>,
    /// The ordered question sequence. Wire name is `quiz`.
    #[serde(rename = "quiz")]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub related_topics: Vec<String>,
    pub generated_at: DateTime<Utc>,
    #[serde(default)]
    pub difficulty_distribution: DifficultyDistribution,
}

impl Quiz {
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_prefers_hard_over_everything() {
        let dist = DifficultyDistribution {
            easy: 5,
            medium: 2,
            hard: 1,
        };
        assert_eq!(dist.dominant(), Difficulty::Hard);
    }

    #[test]
    fn dominant_medium_when_medium_outnumbers_easy() {
        let dist = DifficultyDistribution {
            easy: 2,
            medium: 3,
            hard: 0,
        };
        assert_eq!(dist.dominant(), Difficulty::Medium);
    }

    #[test]
    fn dominant_defaults_to_easy() {
        let dist = DifficultyDistribution {
            easy: 3,
            medium: 3,
            hard: 0,
        };
        assert_eq!(dist.dominant(), Difficulty::Easy);
        assert_eq!(DifficultyDistribution::default().dominant(), Difficulty::Easy);
    }

    #[test]
    fn quiz_deserializes_wire_shape() {
        let json = r#"{
            "id": "quiz-1",
            "url": "https://en.wikipedia.org/wiki/Alan_Turing",
            "title": "Alan Turing",
            "summary": "British mathematician and computer scientist.",
            "key_entities": {
                "people": ["Alan Turing"],
                "organizations": ["Bletchley Park"],
                "locations": ["Cambridge"]
            },
            "sections": ["Early life", "Legacy"],
            "quiz": [{
                "id": "q1",
                "question": "Where did Turing study?",
                "options": ["Cambridge", "Oxford", "Edinburgh", "Manchester"],
                "answer": "Cambridge",
                "difficulty": "easy",
                "explanation": "He studied at King's College, Cambridge."
            }],
            "related_topics": ["Enigma machine"],
            "generated_at": "2026-08-29T12:00:00Z",
            "difficulty_distribution": { "easy": 1, "medium": 0, "hard": 0 }
        }"#;
        let quiz: Quiz = serde_json::from_str(json).unwrap();
        assert_eq!(quiz.id, QuizId::new("quiz-1"));
        assert_eq!(quiz.question_count(), 1);
        assert_eq!(quiz.key_entities.people, vec!["Alan Turing"]);
        assert_eq!(quiz.difficulty_distribution.easy, 1);
    }

    #[test]
    fn quiz_tolerates_missing_optional_collections() {
        let json = r#"{
            "id": "quiz-2",
            "url": "https://en.wikipedia.org/wiki/Enigma_machine",
            "title": "Enigma machine",
            "summary": "Cipher device.",
            "quiz": [],
            "generated_at": "2026-08-29T12:00:00Z"
        }"#;
        let quiz: Quiz = serde_json::from_str(json).unwrap();
        assert!(quiz.sections.is_empty());
        assert!(quiz.related_topics.is_empty());
        assert_eq!(quiz.difficulty_distribution.total(), 0);
    }
}
