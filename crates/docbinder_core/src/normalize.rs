/// Canonical dedup key for a URL: everything from the first `#` is dropped,
/// then trailing `/` characters are stripped.
///
/// Pure and total; malformed input passes through these string operations
/// unchanged. Idempotent: `normalize_url(normalize_url(u)) == normalize_url(u)`.
pub fn normalize_url(url: &str) -> String {
    let without_fragment = match url.find('#') {
        Some(pos) => &url[..pos],
        None => url,
    };
    without_fragment.trim_end_matches('/').to_string()
}
