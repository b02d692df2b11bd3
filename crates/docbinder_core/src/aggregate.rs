use crate::document::{CrawlResult, PageDocument};

/// Concatenates all page documents, in the order they were appended, into
/// the final markup text: a level-1 heading with the title, a source-URL
/// line, the body, then a rule separator per page.
pub fn render_document(result: &CrawlResult) -> String {
    let blocks: Vec<String> = result.pages.iter().map(page_block).collect();
    blocks.join("\n")
}

fn page_block(page: &PageDocument) -> String {
    format!(
        "# {title}\n\nURL: {url}\n\n{body}\n\n---\n\n",
        title = page.title,
        url = page.source_url,
        body = page.body,
    )
}
