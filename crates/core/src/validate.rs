use thiserror::Error;
use url::Url;

/// Client-side rejection of a generate request before any network call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArticleUrlError {
    #[error("Please enter a Wikipedia URL")]
    Empty,
    #[error("That doesn't look like a valid URL")]
    Malformed,
    #[error("Please enter a valid Wikipedia URL")]
    NotWikipedia,
}

/// Validate that `raw` is an absolute http(s) URL pointing at
/// `wikipedia.org` or one of its subdomains (e.g. `en.wikipedia.org`).
///
/// # Errors
///
/// Returns `ArticleUrlError` for empty input, unparsable URLs, and
/// non-Wikipedia hosts.
pub fn validate_article_url(raw: &str) -> Result<(), ArticleUrlError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ArticleUrlError::Empty);
    }

    let parsed = Url::parse(trimmed).map_err(|_| ArticleUrlError::Malformed)?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ArticleUrlError::Malformed);
    }

    let is_wikipedia = parsed.host_str().is_some_and(|host| {
        host.eq_ignore_ascii_case("wikipedia.org")
            || host.to_ascii_lowercase().ends_with(".wikipedia.org")
    });
    if !is_wikipedia {
        return Err(ArticleUrlError::NotWikipedia);
    }

    Ok(())
}
