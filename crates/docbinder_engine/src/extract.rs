use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::ExtractError;

/// Content-region candidates, evaluated in priority order; first match wins.
const CONTENT_REGION_SELECTORS: &[&str] = &["main", "article", "body"];

/// Subtrees dropped from the content region. The rest of the document is
/// untouched so link discovery still sees navigation links.
const NOISE_TAGS: &[&str] = &["script", "style", "nav", "footer"];

/// Elements serialized without a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Result of content extraction for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    /// `<title>` text, when present and non-empty.
    pub title: Option<String>,
    /// Cleaned content region with `href`/`src` targets rewritten absolute.
    pub content_html: String,
    /// Every anchor target in the whole document, resolved absolute, in
    /// document order, duplicates included. Dedup is the frontier's job.
    pub links: Vec<String>,
}

pub trait Extractor: Send + Sync {
    fn extract(&self, html: &str, page_url: &str) -> Result<ExtractedPage, ExtractError>;
}

/// Extractor over a parsed DOM:
/// - content region is the first of `main`, `article`, `body` (no region at
///   all yields an empty fragment, which is still a success)
/// - `script`/`style`/`nav`/`footer` subtrees are stripped from the region
/// - anchors and images inside the region are rewritten to absolute URLs
/// - links are discovered across the entire document, not just the region.
#[derive(Debug, Default)]
pub struct DomExtractor;

impl Extractor for DomExtractor {
    fn extract(&self, html: &str, page_url: &str) -> Result<ExtractedPage, ExtractError> {
        let doc = Html::parse_document(html);
        let base = Url::parse(page_url).ok();

        let title_sel = Selector::parse("title").ok();
        let title = title_sel
            .as_ref()
            .and_then(|sel| doc.select(sel).next())
            .map(|t| t.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty());

        let content_html = select_region(&doc)
            .map(|region| serialize_region(region, base.as_ref()))
            .unwrap_or_default();
        let links = discover_links(&doc, base.as_ref());

        Ok(ExtractedPage {
            title,
            content_html,
            links,
        })
    }
}

fn select_region(doc: &Html) -> Option<ElementRef<'_>> {
    CONTENT_REGION_SELECTORS.iter().find_map(|css| {
        let sel = Selector::parse(css).ok()?;
        doc.select(&sel).next()
    })
}

fn discover_links(doc: &Html, base: Option<&Url>) -> Vec<String> {
    let Some(anchor_sel) = Selector::parse("a[href]").ok() else {
        return Vec::new();
    };
    doc.select(&anchor_sel)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter_map(|href| resolve_target(href, base))
        .collect()
}

/// Resolves a link or image target to absolute form against the page URL.
fn resolve_target(reference: &str, base: Option<&Url>) -> Option<String> {
    let trimmed = reference.trim();
    if trimmed.is_empty() || trimmed.to_ascii_lowercase().starts_with("javascript:") {
        return None;
    }
    if let Ok(url) = Url::parse(trimmed) {
        return Some(url.into());
    }
    base.and_then(|base| base.join(trimmed).ok())
        .map(String::from)
}

/// Re-serializes the content region's children, skipping noise subtrees and
/// rewriting link/image targets as it goes.
fn serialize_region(region: ElementRef<'_>, base: Option<&Url>) -> String {
    let mut out = String::new();
    for child in region.children() {
        write_node(child, base, &mut out);
    }
    out
}

fn write_node(node: NodeRef<'_, Node>, base: Option<&Url>, out: &mut String) {
    match node.value() {
        Node::Text(text) => push_escaped_text(text, out),
        Node::Element(_) => {
            if let Some(element) = ElementRef::wrap(node) {
                write_element(element, base, out);
            }
        }
        // Comments, doctypes and processing instructions carry no content.
        _ => {}
    }
}

fn write_element(element: ElementRef<'_>, base: Option<&Url>, out: &mut String) {
    let tag = element.value().name();
    if NOISE_TAGS.contains(&tag) {
        return;
    }

    out.push('<');
    out.push_str(tag);
    for (name, value) in element.value().attrs() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        match rewritten_target(tag, name, value, base) {
            Some(absolute) => push_escaped_attr(&absolute, out),
            None => push_escaped_attr(value, out),
        }
        out.push('"');
    }
    out.push('>');

    if VOID_TAGS.contains(&tag) {
        return;
    }
    for child in element.children() {
        write_node(child, base, out);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn rewritten_target(tag: &str, attr: &str, value: &str, base: Option<&Url>) -> Option<String> {
    let is_link_target = (tag == "a" && attr == "href") || (tag == "img" && attr == "src");
    if is_link_target {
        resolve_target(value, base)
    } else {
        None
    }
}

fn push_escaped_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn push_escaped_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
