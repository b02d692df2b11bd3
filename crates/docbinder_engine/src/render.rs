use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;

use crate::decode::decode_body;
use crate::{RenderError, RenderFailure, RenderedPage};

/// Knobs for the HTTP renderer.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 5 * 1024 * 1024,
            allowed_content_types: vec![
                "text/html".to_string(),
                "application/xhtml+xml".to_string(),
            ],
        }
    }
}

/// External collaborator that turns a URL into fully rendered page HTML.
///
/// Two implementations ship: [`HttpRenderer`] fetches static HTML over HTTP,
/// and [`crate::ChromiumRenderer`] drives a headless browser for sites that
/// build their DOM with client-side scripts.
#[async_trait::async_trait]
pub trait Renderer: Send + Sync {
    async fn render(&self, url: &str) -> Result<RenderedPage, RenderError>;
}

/// Renderer backed by reqwest: follows redirects up to a limit, enforces a
/// body size cap and a content-type allowlist, then decodes to UTF-8.
///
/// One client serves the whole crawl, so connections stay alive between
/// pages of the same host.
#[derive(Debug, Clone)]
pub struct HttpRenderer {
    settings: RenderSettings,
    client: reqwest::Client,
}

impl HttpRenderer {
    pub fn new(settings: RenderSettings) -> Result<Self, RenderError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(settings.redirect_limit))
            .build()
            .map_err(|err| RenderError::new(RenderFailure::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn is_content_type_allowed(&self, content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }
}

#[async_trait::async_trait]
impl Renderer for HttpRenderer {
    async fn render(&self, url: &str) -> Result<RenderedPage, RenderError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| RenderError::new(RenderFailure::InvalidUrl, err.to_string()))?;
        let requested = parsed.to_string();

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RenderError::new(
                RenderFailure::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(RenderError::new(
                    RenderFailure::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        if let Some(ct) = content_type.as_deref() {
            if !self.is_content_type_allowed(ct) {
                return Err(RenderError::new(
                    RenderFailure::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "unsupported content type",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(RenderError::new(
                    RenderFailure::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        let decoded = decode_body(&bytes, content_type.as_deref()).map_err(|encoding| {
            RenderError::new(
                RenderFailure::Decode { encoding },
                "body rejected by decoder",
            )
        })?;

        if final_url != requested {
            crawl_logging::crawl_debug!("{url} redirected to {final_url}");
        }

        Ok(RenderedPage {
            html: decoded.text,
            final_url,
            encoding_label: decoded.encoding_label,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> RenderError {
    if err.is_timeout() {
        return RenderError::new(RenderFailure::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return RenderError::new(RenderFailure::RedirectLimitExceeded, err.to_string());
    }
    RenderError::new(RenderFailure::Network, err.to_string())
}
