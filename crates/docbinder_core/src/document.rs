/// One successfully processed page, immutable once appended to the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDocument {
    pub title: String,
    pub source_url: String,
    /// Converted markup body.
    pub body: String,
}

/// Ordered sequence of page documents plus the count of pages claimed for
/// processing (successes and failures both count).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CrawlResult {
    /// Pages in visitation (breadth-first) order.
    pub pages: Vec<PageDocument>,
    pub visited: usize,
}

impl CrawlResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, page: PageDocument) {
        self.pages.push(page);
    }
}
