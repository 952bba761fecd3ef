mod ids;
mod question;
mod quiz;
mod submission;

pub use ids::{QuestionId, QuizId};
pub use question::{Difficulty, GenerationDifficulty, ParseDifficultyError, Question};
pub use quiz::{DifficultyDistribution, KeyEntities, Quiz};
pub use submission::{AnswerSelection, QuestionResult, QuizSubmission, ScoredSubmission};
