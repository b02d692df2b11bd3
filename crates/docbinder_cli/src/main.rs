//! docbinder: crawl a documentation site into a single Markdown file.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use docbinder_core::render_document;
use docbinder_engine::{
    write_output, BrowserSettings, ChromiumRenderer, Crawler, DomExtractor, Html2MdConverter,
    HttpRenderer, RenderSettings, Renderer,
};

#[derive(Parser, Debug)]
#[command(
    name = "docbinder",
    version,
    about = "Crawl a documentation website and save it as a single Markdown file"
)]
struct Cli {
    /// The URL to start crawling from.
    #[arg(long)]
    url: String,

    /// The output markdown file.
    #[arg(long, default_value = "docs.md")]
    output: PathBuf,

    /// Render pages in a headless Chromium so client-side scripts run.
    #[arg(long)]
    browser: bool,

    /// Log at debug level instead of info.
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    crawl_logging::initialize(cli.verbose);

    let renderer: Arc<dyn Renderer> = if cli.browser {
        Arc::new(
            ChromiumRenderer::launch(BrowserSettings::default())
                .await
                .context("could not launch a headless browser")?,
        )
    } else {
        Arc::new(
            HttpRenderer::new(RenderSettings::default())
                .context("could not build the http client")?,
        )
    };
    let crawler = Crawler::new(renderer, Arc::new(DomExtractor), Arc::new(Html2MdConverter));
    let outcome = crawler
        .crawl(&cli.url)
        .await
        .context("crawl could not start")?;

    let document = render_document(&outcome.result);
    write_output(&cli.output, &document)
        .with_context(|| format!("could not write {}", cli.output.display()))?;

    // Partial page failures do not fail the run; they were reported as the
    // crawl went and are summarized here.
    if !outcome.failures.is_empty() {
        println!("{} page(s) failed and were skipped", outcome.failures.len());
    }
    println!("Scraping complete! Saved to {}", cli.output.display());
    println!("Total pages visited: {}", outcome.result.visited);

    Ok(())
}
