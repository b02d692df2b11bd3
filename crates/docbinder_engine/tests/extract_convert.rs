use docbinder_engine::{
    collapse_blank_lines, Converter, DomExtractor, Extractor, Html2MdConverter,
};
use pretty_assertions::assert_eq;

const PAGE_URL: &str = "https://site.com/docs/y";

fn extract(html: &str) -> docbinder_engine::ExtractedPage {
    DomExtractor.extract(html, PAGE_URL).expect("extract ok")
}

#[test]
fn main_region_wins_over_article_and_body() {
    let html = r#"
    <html><head><title>T</title></head>
    <body>
        <p>outside</p>
        <article><p>article text</p></article>
        <main><p>main text</p></main>
    </body></html>
    "#;
    let page = extract(html);
    assert!(page.content_html.contains("main text"));
    assert!(!page.content_html.contains("article text"));
    assert!(!page.content_html.contains("outside"));
}

#[test]
fn article_region_wins_over_body() {
    let html = r#"<body><p>outside</p><article><p>inside</p></article></body>"#;
    let page = extract(html);
    assert!(page.content_html.contains("inside"));
    assert!(!page.content_html.contains("outside"));
}

#[test]
fn body_is_the_fallback_region() {
    let html = r#"<body><p>just a body</p></body>"#;
    let page = extract(html);
    assert!(page.content_html.contains("just a body"));
}

#[test]
fn empty_document_extracts_successfully_with_empty_content() {
    let page = extract("");
    assert_eq!(page.title, None);
    assert!(page.links.is_empty());
    assert_eq!(page.content_html.trim(), "");
}

#[test]
fn noise_subtrees_are_removed_from_the_region_only() {
    let html = r#"
    <body>
        <main>
            <nav><a href="/toc">table of contents</a></nav>
            <script>var x = 1;</script>
            <style>p { color: red; }</style>
            <p>keep me</p>
            <footer>page footer</footer>
        </main>
    </body>
    "#;
    let page = extract(html);
    assert!(page.content_html.contains("keep me"));
    assert!(!page.content_html.contains("table of contents"));
    assert!(!page.content_html.contains("var x"));
    assert!(!page.content_html.contains("color: red"));
    assert!(!page.content_html.contains("page footer"));
    // The nav link is gone from the fragment but still discovered.
    assert_eq!(page.links, vec!["https://site.com/toc".to_string()]);
}

#[test]
fn anchors_and_images_are_rewritten_absolute() {
    let html = r#"
    <main>
        <a href="/x">root relative</a>
        <a href="../z">parent relative</a>
        <img src="pic.png">
    </main>
    "#;
    let page = extract(html);
    assert!(page.content_html.contains(r#"href="https://site.com/x""#));
    assert!(page.content_html.contains(r#"href="https://site.com/z""#));
    assert!(page.content_html.contains(r#"src="https://site.com/docs/pic.png""#));
}

#[test]
fn links_are_discovered_across_the_whole_document_in_order() {
    let html = r#"
    <body>
        <header><a href="/first">one</a></header>
        <main><a href="/second">two</a></main>
        <footer><a href="/third">three</a><a href="/second">again</a></footer>
    </body>
    "#;
    let page = extract(html);
    assert_eq!(
        page.links,
        vec![
            "https://site.com/first".to_string(),
            "https://site.com/second".to_string(),
            "https://site.com/third".to_string(),
            // Duplicates stay; dedup belongs to the frontier.
            "https://site.com/second".to_string(),
        ]
    );
}

#[test]
fn javascript_and_empty_targets_are_skipped() {
    let html = r#"<main><a href="javascript:void(0)">x</a><a href="  ">y</a></main>"#;
    let page = extract(html);
    assert!(page.links.is_empty());
}

#[test]
fn title_comes_from_the_title_element() {
    let page = extract(r#"<head><title> My Docs </title></head><body></body>"#);
    assert_eq!(page.title.as_deref(), Some("My Docs"));

    let untitled = extract(r#"<body><p>no title here</p></body>"#);
    assert_eq!(untitled.title, None);
}

#[test]
fn text_is_escaped_when_reserialized() {
    let html = r#"<main><p>a &amp; b &lt;tag&gt;</p></main>"#;
    let page = extract(html);
    assert!(page.content_html.contains("a &amp; b &lt;tag&gt;"));
}

#[test]
fn converter_emits_atx_headings() {
    let md = Html2MdConverter
        .to_markdown("<h2>Hello</h2><p>world</p>")
        .expect("convert ok");
    assert!(md.contains("## Hello"));
    assert!(md.contains("world"));
}

#[test]
fn three_or_more_blank_lines_collapse_to_one() {
    // Four blank lines between a and b.
    assert_eq!(collapse_blank_lines("a\n\n\n\n\nb"), "a\n\nb");
    // Exactly three blank lines also collapse.
    assert_eq!(collapse_blank_lines("a\n\n\n\nb"), "a\n\nb");
}

#[test]
fn single_and_double_blank_lines_are_untouched() {
    assert_eq!(collapse_blank_lines("a\nb"), "a\nb");
    assert_eq!(collapse_blank_lines("a\n\nb"), "a\n\nb");
    assert_eq!(collapse_blank_lines("a\n\n\nb"), "a\n\n\nb");
}

#[test]
fn collapsed_output_is_trimmed() {
    assert_eq!(collapse_blank_lines("\n\n  body  \n\n\n\n"), "body");
}
