#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod session;
pub mod validate;

pub use error::Error;
pub use session::{QuizSession, SessionProgress};
pub use validate::{ArticleUrlError, validate_article_url};
