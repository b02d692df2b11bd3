//! Docbinder engine: the crawl I/O pipeline.
//!
//! Render (fetch + decode), extract, convert and orchestrate live here; the
//! pure bookkeeping (frontier, scope, aggregation) lives in `docbinder_core`.
mod browser;
mod convert;
mod crawl;
mod decode;
mod extract;
mod persist;
mod render;
mod types;

pub use browser::{BrowserSettings, ChromiumRenderer};
pub use convert::{collapse_blank_lines, Converter, Html2MdConverter};
pub use crawl::{CrawlOutcome, Crawler};
pub use decode::{decode_body, DecodedBody};
pub use extract::{DomExtractor, ExtractedPage, Extractor};
pub use persist::{write_output, PersistError};
pub use render::{HttpRenderer, RenderSettings, Renderer};
pub use types::{
    ConvertError, CrawlError, ExtractError, PageError, PageFailure, RenderError, RenderFailure,
    RenderedPage,
};
