//! HTTP transport for the quiz backend.
//!
//! One `reqwest::Client` with a fixed base URL and request timeout. Every
//! failure surfaces to the caller immediately; there is no retry policy.
//! The visible retry affordance in the UI is the recovery mechanism.

use std::env;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use tracing::debug;

use quiz_core::model::{
    GenerationDifficulty, Quiz, QuizId, QuizSubmission, ScoredSubmission,
};

use crate::error::{ApiError, parse_error_body};
use crate::history::{HistoryQuery, QuizListPage};

const DEFAULT_BASE_URL: &str = "http://localhost:8002/api";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone, Debug)]
pub struct QuizApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for QuizApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl QuizApiConfig {
    /// Read `WIKIQUIZ_API_BASE` and `WIKIQUIZ_TIMEOUT_SECS`, falling back
    /// to the defaults for anything unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("WIKIQUIZ_API_BASE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout = env::var("WIKIQUIZ_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs);
        Self { base_url, timeout }
    }
}

/// Request body for `POST /quizzes/generate`.
#[derive(Clone, Debug, Serialize)]
pub struct GenerateQuizRequest {
    pub url: String,
    pub question_count: u8,
    pub difficulty: GenerationDifficulty,
}

#[derive(Debug, Deserialize)]
struct RelatedTopicsResponse {
    related_topics: Vec<String>,
}

/// Client for the quiz backend API.
#[derive(Clone)]
pub struct QuizApi {
    client: Client,
    base_url: String,
}

impl QuizApi {
    /// Build a client with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the underlying client cannot be built.
    pub fn new(config: &QuizApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Ask the backend to generate a quiz from a Wikipedia article.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for transport failures and backend-reported errors.
    pub async fn generate_quiz(&self, request: &GenerateQuizRequest) -> Result<Quiz, ApiError> {
        debug!(url = %request.url, count = request.question_count, "POST /quizzes/generate");
        let response = self
            .client
            .post(self.endpoint("/quizzes/generate"))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    /// One page of previously generated quizzes, optionally filtered.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for transport failures and backend-reported errors.
    pub async fn list_quizzes(&self, query: &HistoryQuery) -> Result<QuizListPage, ApiError> {
        debug!(page = query.page, limit = query.limit, "GET /quizzes");
        let response = self
            .client
            .get(self.endpoint("/quizzes"))
            .query(&query.query_pairs())
            .send()
            .await?;
        decode(response).await
    }

    /// Fetch a single quiz by id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for transport failures and backend-reported errors.
    pub async fn quiz(&self, id: &QuizId) -> Result<Quiz, ApiError> {
        debug!(quiz_id = %id, "GET /quizzes/{{id}}");
        let response = self
            .client
            .get(self.endpoint(&format!("/quizzes/{id}")))
            .send()
            .await?;
        decode(response).await
    }

    /// Submit answers for scoring. The backend is authoritative; partial
    /// answer sets are accepted.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for transport failures and backend-reported errors.
    pub async fn submit_quiz(
        &self,
        submission: &QuizSubmission,
    ) -> Result<ScoredSubmission, ApiError> {
        debug!(quiz_id = %submission.quiz_id, answers = submission.answers.len(), "POST /quizzes/{{id}}/submit");
        let response = self
            .client
            .post(self.endpoint(&format!("/quizzes/{}/submit", submission.quiz_id)))
            .json(submission)
            .send()
            .await?;
        decode(response).await
    }

    /// Topics related to a quiz's source article.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for transport failures and backend-reported errors.
    pub async fn related_topics(&self, id: &QuizId) -> Result<Vec<String>, ApiError> {
        debug!(quiz_id = %id, "GET /quizzes/{{id}}/related");
        let response = self
            .client
            .get(self.endpoint(&format!("/quizzes/{id}/related")))
            .send()
            .await?;
        let body: RelatedTopicsResponse = decode(response).await?;
        Ok(body.related_topics)
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    debug!(%status, "quiz API response");
    if status.is_success() {
        Ok(response.json().await?)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(parse_error_body(status, &body))
    }
}
