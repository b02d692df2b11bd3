//! Docbinder core: pure crawl bookkeeping, no I/O.
mod aggregate;
mod document;
mod frontier;
mod normalize;
mod scope;

pub use aggregate::render_document;
pub use document::{CrawlResult, PageDocument};
pub use frontier::Frontier;
pub use normalize::normalize_url;
pub use scope::OriginInfo;
