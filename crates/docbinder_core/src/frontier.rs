use std::collections::{HashSet, VecDeque};

use crate::normalize::normalize_url;

/// FIFO work queue of pages to visit, with dedup against everything ever
/// enqueued and everything already processed.
///
/// Entries are raw URLs; membership is keyed on their normalized form, so two
/// URLs differing only by fragment or trailing slash are the same page. The
/// queue only ever holds URLs whose key is seen but not yet visited, and
/// [`Frontier::claim_next`] hands out each key at most once per run.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<String>,
    /// Every normalized key ever enqueued.
    seen: HashSet<String>,
    /// Every normalized key whose processing attempt completed or started.
    visited: HashSet<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a raw URL. Returns `false` (and does nothing) when its
    /// normalized key was already enqueued at some point in this run.
    pub fn push(&mut self, url: &str) -> bool {
        let key = normalize_url(url);
        if !self.seen.insert(key) {
            return false;
        }
        self.queue.push_back(url.to_string());
        true
    }

    /// Pops the earliest-queued URL and eagerly marks its key visited, so a
    /// page whose processing dies is never re-attempted. Entries whose key
    /// was already claimed are discarded. Returns `None` once the queue is
    /// drained.
    ///
    /// Pop and visited-mark are a single operation; the raw queue is never
    /// exposed.
    pub fn claim_next(&mut self) -> Option<String> {
        while let Some(url) = self.queue.pop_front() {
            let key = normalize_url(&url);
            if self.visited.insert(key) {
                return Some(url);
            }
        }
        None
    }

    /// Number of entries still waiting in the queue.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Number of URLs claimed for processing so far.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
