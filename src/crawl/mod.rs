// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Submodules:
// - fetch: downloads a page and reports where it ended up (after redirects)
// - links: pulls <a href> values out of HTML and keeps the same-site ones
// - queue: the breadth-first crawler tying the two together
// =============================================================================

mod fetch;
mod links;
mod queue;

pub use fetch::HttpFetcher;
pub use queue::Crawler;
