use std::fmt;

use thiserror::Error;

/// Fully rendered page HTML, decoded to UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub html: String,
    /// URL after redirects; the crawl keys pages on the original URL.
    pub final_url: String,
    pub encoding_label: String,
}

/// Why a render attempt failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderFailure {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    Decode { encoding: String },
    Network,
    Browser,
}

impl fmt::Display for RenderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderFailure::InvalidUrl => write!(f, "invalid url"),
            RenderFailure::HttpStatus(code) => write!(f, "http status {code}"),
            RenderFailure::Timeout => write!(f, "timeout"),
            RenderFailure::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            RenderFailure::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            RenderFailure::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            RenderFailure::Decode { encoding } => {
                write!(f, "could not decode body as {encoding}")
            }
            RenderFailure::Network => write!(f, "network error"),
            RenderFailure::Browser => write!(f, "browser failure"),
        }
    }
}

/// Page rendering failed (network, navigation or decoding).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct RenderError {
    pub kind: RenderFailure,
    pub message: String,
}

impl RenderError {
    pub(crate) fn new(kind: RenderFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// The document could not be processed into an extracted page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("unparsable document: {0}")]
    Unparsable(String),
}

/// The cleaned fragment could not be converted to markup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("malformed fragment: {0}")]
    MalformedFragment(String),
}

/// A page-scoped failure. All variants are non-fatal to the run and are
/// never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
    #[error("extraction failed: {0}")]
    Extract(#[from] ExtractError),
    #[error("conversion failed: {0}")]
    Convert(#[from] ConvertError),
}

/// One failed page attempt; each URL appears at most once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFailure {
    pub url: String,
    pub error: PageError,
}

/// Errors that abort the run before any page is processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrawlError {
    #[error("seed url has no crawlable origin: {0}")]
    InvalidSeed(String),
}
