use std::sync::Arc;

use docbinder_core::{CrawlResult, Frontier, OriginInfo, PageDocument};

use crate::convert::collapse_blank_lines;
use crate::{
    Converter, CrawlError, DomExtractor, Extractor, Html2MdConverter, HttpRenderer, PageError,
    PageFailure, RenderError, RenderSettings, Renderer,
};
use crawl_logging::{crawl_info, crawl_warn};

/// What a finished run produced: the ordered document sequence plus the
/// pages that failed along the way.
#[derive(Debug)]
pub struct CrawlOutcome {
    pub result: CrawlResult,
    pub failures: Vec<PageFailure>,
}

/// Drives the traversal: claims URLs from the frontier, runs the
/// render/extract/convert pipeline per page, feeds in-scope links back, and
/// survives any per-page failure.
///
/// Single logical worker: frontier and result are owned by this loop, so
/// output order is exactly breadth-first visitation order.
pub struct Crawler {
    renderer: Arc<dyn Renderer>,
    extractor: Arc<dyn Extractor>,
    converter: Arc<dyn Converter>,
}

impl Crawler {
    pub fn new(
        renderer: Arc<dyn Renderer>,
        extractor: Arc<dyn Extractor>,
        converter: Arc<dyn Converter>,
    ) -> Self {
        Self {
            renderer,
            extractor,
            converter,
        }
    }

    /// Crawler over the default collaborators: HTTP renderer, DOM extractor,
    /// html2md converter. Fails only when the HTTP client cannot be built.
    pub fn with_defaults(settings: RenderSettings) -> Result<Self, RenderError> {
        Ok(Self::new(
            Arc::new(HttpRenderer::new(settings)?),
            Arc::new(DomExtractor),
            Arc::new(Html2MdConverter),
        ))
    }

    /// Runs the crawl to completion. The only fatal error is a seed URL
    /// without a crawlable origin; every page-level failure is recorded and
    /// the loop moves on.
    pub async fn crawl(&self, seed: &str) -> Result<CrawlOutcome, CrawlError> {
        let origin = OriginInfo::from_seed(seed)
            .ok_or_else(|| CrawlError::InvalidSeed(seed.to_string()))?;
        crawl_info!(
            "crawl scope: host={} base_path={}",
            origin.host(),
            origin.base_path()
        );

        let mut frontier = Frontier::new();
        frontier.push(seed);

        let mut result = CrawlResult::new();
        let mut failures = Vec::new();

        while let Some(url) = frontier.claim_next() {
            crawl_info!("visiting {url} ({} queued)", frontier.pending());

            let rendered = match self.renderer.render(&url).await {
                Ok(rendered) => rendered,
                Err(err) => {
                    record_failure(&mut failures, url, err.into());
                    continue;
                }
            };

            let extracted = match self.extractor.extract(&rendered.html, &url) {
                Ok(extracted) => extracted,
                Err(err) => {
                    record_failure(&mut failures, url, err.into());
                    continue;
                }
            };

            // Link discovery succeeded at this point; a conversion failure
            // below must not keep the links out of the frontier.
            match self.converter.to_markdown(&extracted.content_html) {
                Ok(markup) => {
                    result.append(PageDocument {
                        title: extracted.title.clone().unwrap_or_else(|| url.clone()),
                        source_url: url.clone(),
                        body: collapse_blank_lines(&markup),
                    });
                }
                Err(err) => record_failure(&mut failures, url.clone(), err.into()),
            }

            for link in &extracted.links {
                if origin.in_scope(link) {
                    frontier.push(link);
                }
            }
        }

        result.visited = frontier.visited_count();
        crawl_info!(
            "crawl finished: {} documents, {} pages visited, {} failures",
            result.pages.len(),
            result.visited,
            failures.len()
        );

        Ok(CrawlOutcome { result, failures })
    }
}

fn record_failure(failures: &mut Vec<PageFailure>, url: String, error: PageError) {
    crawl_warn!("failed to process {url}: {error}");
    failures.push(PageFailure { url, error });
}
