use std::path::PathBuf;
use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::error::CdpError;
use chromiumoxide::Page;
use futures_util::StreamExt;

use crate::{RenderError, RenderFailure, RenderedPage, Renderer};
use crawl_logging::{crawl_debug, crawl_warn};

/// Knobs for the headless-browser renderer.
#[derive(Debug, Clone)]
pub struct BrowserSettings {
    /// Explicit Chrome/Chromium binary; `None` looks one up on the system.
    pub executable: Option<PathBuf>,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            executable: None,
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Renderer backed by a headless Chromium over CDP. Pages execute their
/// client-side scripts before the DOM is serialized, which the static
/// [`crate::HttpRenderer`] cannot offer.
#[derive(Debug)]
pub struct ChromiumRenderer {
    browser: Browser,
    handler_task: tokio::task::JoinHandle<()>,
    settings: BrowserSettings,
}

impl ChromiumRenderer {
    /// Launches the browser process and starts the event pump that drives
    /// the CDP connection.
    pub async fn launch(settings: BrowserSettings) -> Result<Self, RenderError> {
        let mut builder = BrowserConfig::builder().request_timeout(settings.request_timeout);
        if let Some(executable) = &settings.executable {
            builder = builder.chrome_executable(executable);
        }
        let config = builder
            .build()
            .map_err(|message| RenderError::new(RenderFailure::Browser, message))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|err| RenderError::new(RenderFailure::Browser, err.to_string()))?;

        // The connection makes no progress unless this stream is polled; it
        // ends when the browser goes away.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            browser,
            handler_task,
            settings,
        })
    }

    async fn render_on(&self, page: &Page, url: &str) -> Result<RenderedPage, RenderError> {
        let navigation = async {
            page.goto(url).await?;
            page.wait_for_navigation().await?;
            page.content().await
        };
        let html = tokio::time::timeout(self.settings.request_timeout, navigation)
            .await
            .map_err(|_| RenderError::new(RenderFailure::Timeout, "navigation timed out"))?
            .map_err(map_cdp_error)?;

        let size = html.len() as u64;
        if size > self.settings.max_bytes {
            return Err(RenderError::new(
                RenderFailure::TooLarge {
                    max_bytes: self.settings.max_bytes,
                    actual: Some(size),
                },
                "rendered document too large",
            ));
        }

        let final_url = page
            .url()
            .await
            .map_err(map_cdp_error)?
            .unwrap_or_else(|| url.to_string());
        if final_url != url {
            crawl_debug!("{url} redirected to {final_url}");
        }

        // CDP hands the serialized DOM over as UTF-8 whatever the wire
        // bytes were.
        Ok(RenderedPage {
            html,
            final_url,
            encoding_label: "UTF-8".to_string(),
        })
    }
}

#[async_trait::async_trait]
impl Renderer for ChromiumRenderer {
    async fn render(&self, url: &str) -> Result<RenderedPage, RenderError> {
        url::Url::parse(url)
            .map_err(|err| RenderError::new(RenderFailure::InvalidUrl, err.to_string()))?;

        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(map_cdp_error)?;
        let rendered = self.render_on(&page, url).await;

        // Close eagerly so a long crawl does not pile up tabs.
        if let Err(err) = page.close().await {
            crawl_warn!("could not close the page for {url}: {err}");
        }
        rendered
    }
}

impl Drop for ChromiumRenderer {
    fn drop(&mut self) {
        // The browser's own Drop kills the child process; the event pump
        // stops with it.
        self.handler_task.abort();
    }
}

fn map_cdp_error(err: CdpError) -> RenderError {
    match err {
        CdpError::Timeout => RenderError::new(RenderFailure::Timeout, "browser call timed out"),
        other => RenderError::new(RenderFailure::Browser, other.to_string()),
    }
}
