mod history;
mod home;
mod placeholders;
mod quiz;
mod results;
mod state;

#[cfg(test)]
mod view_smoke;

pub use history::HistoryView;
pub use home::HomeView;
pub use placeholders::{LearnView, LeaderboardView};
pub use quiz::QuizView;
pub use results::ResultsView;
pub use state::{ViewError, ViewState, view_state_from_resource};
