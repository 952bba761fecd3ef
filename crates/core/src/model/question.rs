use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::QuestionId;

/// Difficulty tag carried by every generated question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Label for display ("Easy", "Medium", "Hard").
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDifficultyError;

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected one of: easy, medium, hard")
    }
}

impl std::error::Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError),
        }
    }
}

/// Difficulty mode requested when generating a quiz. `Mixed` asks the
/// backend for a spread across all three levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationDifficulty {
    #[default]
    Mixed,
    Easy,
    Medium,
    Hard,
}

impl GenerationDifficulty {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            GenerationDifficulty::Mixed => "mixed",
            GenerationDifficulty::Easy => "easy",
            GenerationDifficulty::Medium => "medium",
            GenerationDifficulty::Hard => "hard",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            GenerationDifficulty::Mixed => "Mixed Difficulty",
            GenerationDifficulty::Easy => "Easy Only",
            GenerationDifficulty::Medium => "Medium Only",
            GenerationDifficulty::Hard => "Hard Only",
        }
    }

    pub const ALL: [GenerationDifficulty; 4] = [
        GenerationDifficulty::Mixed,
        GenerationDifficulty::Easy,
        GenerationDifficulty::Medium,
        GenerationDifficulty::Hard,
    ];
}

impl fmt::Display for GenerationDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerationDifficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mixed" => Ok(GenerationDifficulty::Mixed),
            "easy" => Ok(GenerationDifficulty::Easy),
            "medium" => Ok(GenerationDifficulty::Medium),
            "hard" => Ok(GenerationDifficulty::Hard),
            _ => Err(ParseDifficultyError),
        }
    }
}

/// A single generated question. Immutable once loaded from the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    /// Prompt text shown to the user.
    #[serde(rename = "question")]
    pub prompt: String,
    /// Ordered list of candidate answers.
    pub options: Vec<String>,
    /// The correct option. Scoring is still backend-authoritative; this is
    /// only carried so the quiz payload is self-contained.
    pub answer: String,
    pub difficulty: Difficulty,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_span: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_reference: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_is_lowercase_on_the_wire() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        let back: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(back, Difficulty::Hard);
    }

    #[test]
    fn difficulty_from_str_rejects_unknown() {
        assert!("extreme".parse::<Difficulty>().is_err());
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
    }

    #[test]
    fn generation_difficulty_defaults_to_mixed() {
        assert_eq!(GenerationDifficulty::default(), GenerationDifficulty::Mixed);
        assert_eq!(GenerationDifficulty::Mixed.as_str(), "mixed");
    }

    #[test]
    fn question_deserializes_wire_shape() {
        let json = r#"{
            "id": "q1",
            "question": "Who proposed the imitation game?",
            "options": ["Alan Turing", "Claude Shannon", "John von Neumann", "Ada Lovelace"],
            "answer": "Alan Turing",
            "difficulty": "easy",
            "explanation": "Turing introduced it in his 1950 paper.",
            "section_reference": "Legacy"
        }"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.id, QuestionId::new("q1"));
        assert_eq!(question.prompt, "Who proposed the imitation game?");
        assert_eq!(question.options.len(), 4);
        assert_eq!(question.difficulty, Difficulty::Easy);
        assert_eq!(question.evidence_span, None);
        assert_eq!(question.section_reference.as_deref(), Some("Legacy"));
    }
}
