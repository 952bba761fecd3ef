use std::sync::Arc;

use quiz_core::model::{Quiz, ScoredSubmission};
use services::QuizApi;

/// Services the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn quiz_api(&self) -> Arc<QuizApi>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_api: Arc<QuizApi>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_api: app.quiz_api(),
        }
    }

    #[must_use]
    pub fn quiz_api(&self) -> Arc<QuizApi> {
        Arc::clone(&self.quiz_api)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
///
/// This context is provided by the application composition root
/// (e.g. `crates/app`).
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// In-memory navigation state carried from a quiz submission to the
/// results route. The backend owns the result; the client only displays
/// it, so loading the results route directly (without a preceding
/// submission) shows the "no results" fallback instead.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultHandoff {
    pub quiz: Quiz,
    pub result: ScoredSubmission,
}
