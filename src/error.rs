use thiserror::Error;

/// A link that could not be parsed as an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid link {link:?}: {source}")]
pub struct ParseError {
    link: String,
    #[source]
    source: url::ParseError,
}

impl ParseError {
    pub fn new(link: impl Into<String>, source: url::ParseError) -> Self {
        Self {
            link: link.into(),
            source,
        }
    }

    pub fn link(&self) -> &str {
        &self.link
    }
}

/// Parses `link` as an absolute URL, keeping the input around for the error.
pub(crate) fn parse_link(link: &str) -> Result<url::Url, ParseError> {
    url::Url::parse(link).map_err(|source| ParseError::new(link, source))
}

/// Why a story could not be turned into a row.
#[derive(Debug, Error)]
pub enum RowError {
    #[error(transparent)]
    Link(#[from] ParseError),
    #[error("timestamp {timestamp} out of range: {source}")]
    Timestamp {
        timestamp: i64,
        #[source]
        source: jiff::Error,
    },
}
