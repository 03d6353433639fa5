// src/crawl/queue.rs
// =============================================================================
// This module implements website crawling with a breadth-first approach.
//
// How it works:
// 1. The frontier starts as just the seed URL
// 2. One "round" visits every frontier URL we haven't visited yet
// 3. Each visited page's same-site links go into the NEXT frontier
// 4. Repeat for exactly max_depth rounds, then return everything visited
//
// Depth counts rounds, not hops per page. If the frontier runs dry early the
// remaining rounds simply do nothing.
//
// A page that fails to download still counts as visited. It just contributes
// no links, and we never try it again.
//
// Rust concepts:
// - HashSet: Frontier and visited sets (O(1) lookup, no duplicates)
// - Generics: Crawler<F> works with any Fetcher, real or fake
// - std::mem::take: Moves a set out and leaves an empty one behind
// =============================================================================

use std::collections::HashSet;

use tracing::{debug, info, warn};

use super::fetch::Fetcher;
use super::links::{normalize_and_filter, parse_links};
use crate::error::FetchError;

/// Breadth-first crawler. The visited and frontier sets live inside a single
/// `crawl` call; the crawler itself only owns its fetcher.
pub struct Crawler<F> {
    fetcher: F,
}

impl<F: Fetcher> Crawler<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    // Crawls from `seed` for `max_depth` rounds
    //
    // Returns: every address that was fetched (or attempted)
    //
    // Example:
    //   max_depth=0: nothing, not even the seed
    //   max_depth=1: just the seed
    //   max_depth=2: seed + the same-site pages it links to
    pub async fn crawl(&self, seed: &str, max_depth: usize) -> HashSet<String> {
        let mut visited = HashSet::new();
        let mut frontier = HashSet::from([seed.to_string()]);

        for depth in 1..=max_depth {
            let current = std::mem::take(&mut frontier);
            info!(depth, frontier = current.len(), "starting round");
            frontier = self.round(seed, current, &mut visited).await;
        }

        info!(visited = visited.len(), "crawl finished");
        visited
    }

    /// Runs one round: visits every unvisited address in `current` and
    /// returns the addresses discovered along the way.
    ///
    /// The returned set may contain addresses that are already visited;
    /// the next round's visited check skips them.
    pub async fn round(
        &self,
        seed: &str,
        current: HashSet<String>,
        visited: &mut HashSet<String>,
    ) -> HashSet<String> {
        let mut next = HashSet::new();

        for address in current {
            // insert() returns false if it was already there
            if !visited.insert(address.clone()) {
                debug!(%address, "already visited");
                continue;
            }

            match self.expand(&address, seed).await {
                Ok(links) => {
                    debug!(%address, found = links.len(), "expanded page");
                    next.extend(links);
                }
                Err(e) => {
                    warn!(%address, error = %e, "skipping page");
                }
            }
        }

        next
    }

    // Fetches one page and returns its same-site links
    async fn expand(&self, address: &str, seed: &str) -> Result<HashSet<String>, FetchError> {
        let page = self.fetcher.fetch(address).await?;
        let hrefs = parse_links(&page.body);
        Ok(normalize_and_filter(&page.origin, &hrefs, seed))
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why HashSet instead of VecDeque?
//    - We process the crawl level by level, not one page at a time
//    - Each level is a set: order doesn't matter, duplicates can't happen
//
// 2. What does std::mem::take do?
//    - Replaces a value with its Default (an empty HashSet here)
//    - Gives us the old value without cloning it
//
// 3. Why is the visited check in round() and not when adding links?
//    - A link can be discovered many times in one round
//    - Checking once, right before fetching, is enough to fetch it once
// -----------------------------------------------------------------------------
