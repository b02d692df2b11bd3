use url::Url;

/// Traversal scope derived from the seed URL.
///
/// Carries the seed host and a base path. Only the host participates in the
/// scope decision; the base path is derived for diagnostics and for callers
/// that want to layer a path-prefix restriction on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginInfo {
    host: String,
    base_path: String,
}

impl OriginInfo {
    /// Derives the scope from the seed URL, or `None` when the seed does not
    /// parse or has no host.
    pub fn from_seed(seed: &str) -> Option<Self> {
        let parsed = Url::parse(seed).ok()?;
        let host = parsed.host_str()?.to_string();

        let mut base_path = parsed.path().to_string();
        let last_segment = base_path.rsplit('/').next().unwrap_or("");
        // A final segment without a dot is treated as a directory.
        if !base_path.ends_with('/') && !last_segment.contains('.') {
            base_path.push('/');
        }

        Some(Self { host, base_path })
    }

    /// A candidate is in scope iff its host equals the seed host.
    ///
    /// Advisory only: the crawl stays correct if this admits more than
    /// intended, because dedup is keyed on normalized URLs, not on scope.
    pub fn in_scope(&self, candidate: &str) -> bool {
        match Url::parse(candidate) {
            Ok(url) => url.host_str() == Some(self.host.as_str()),
            Err(_) => false,
        }
    }

    /// The seed host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The seed path, `/`-terminated when its final segment looks like a
    /// directory. Not enforced by [`OriginInfo::in_scope`].
    pub fn base_path(&self) -> &str {
        &self.base_path
    }
}
