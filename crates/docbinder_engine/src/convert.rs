use crate::ConvertError;

/// External collaborator that turns a cleaned HTML fragment into markup text
/// with ATX-style headings.
pub trait Converter: Send + Sync {
    fn to_markdown(&self, html: &str) -> Result<String, ConvertError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Html2MdConverter;

impl Converter for Html2MdConverter {
    fn to_markdown(&self, html: &str) -> Result<String, ConvertError> {
        Ok(html2md::parse_html(html))
    }
}

/// Collapses every run of three-or-more consecutive blank lines to exactly
/// one blank line, then trims leading and trailing whitespace. Runs of one
/// or two blank lines pass through unchanged.
pub fn collapse_blank_lines(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut newline_run = 0usize;
    for ch in markup.chars() {
        if ch == '\n' {
            newline_run += 1;
            continue;
        }
        flush_newlines(newline_run, &mut out);
        newline_run = 0;
        out.push(ch);
    }
    flush_newlines(newline_run, &mut out);
    out.trim().to_string()
}

fn flush_newlines(run: usize, out: &mut String) {
    // A run of n newline characters is n-1 blank lines; 3+ blank lines
    // collapse to a single one.
    let emit = if run >= 4 { 2 } else { run };
    for _ in 0..emit {
        out.push('\n');
    }
}
