use thiserror::Error;

use crate::validate::ArticleUrlError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    ArticleUrl(#[from] ArticleUrlError),
}
