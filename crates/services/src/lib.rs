#![forbid(unsafe_code)]

pub mod client;
pub mod error;
pub mod history;
pub mod sequence;

pub use client::{GenerateQuizRequest, QuizApi, QuizApiConfig};
pub use error::ApiError;
pub use history::{HistoryQuery, QuizListPage, page_count};
pub use sequence::{RequestSequencer, RequestTag};
