// src/crawl/links.rs
// =============================================================================
// This module turns a page's HTML into the next set of pages to visit.
//
// Two steps:
// 1. parse_links: pull every <a href="..."> value out of the HTML
// 2. normalize_and_filter: make those hrefs absolute and keep the ones that
//    belong to the site we're mapping
//
// Only two href shapes are understood:
// - "/path"        -> root-relative, glued onto the page's origin
// - "http..."      -> already absolute (http:// and https://)
// Everything else ("#top", "mailto:", "page.html", "//cdn...") is dropped.
// =============================================================================

use std::collections::HashSet;

use scraper::{Html, Selector};

// Extracts the href of every <a> tag, in document order
//
// The HTML parser recovers from broken markup instead of failing, so this
// never errors: a garbage page just yields fewer (or zero) links.
//
// Example:
//   body = b"<a href='/docs'>Docs</a><a>no href</a>"
//   result = ["/docs"]
pub fn parse_links(body: &[u8]) -> Vec<String> {
    let html = String::from_utf8_lossy(body);
    let document = Html::parse_document(&html);

    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}

// Resolves raw hrefs against a page's origin and keeps the same-site ones
//
// Parameters:
//   origin: scheme://host of the page the hrefs came from
//   hrefs: raw href attribute values
//   seed: the starting URL of the whole crawl
//
// "Same site" is a plain string-prefix check against the seed, not a host
// comparison. A seed of https://example.com/blog keeps
// https://example.com/blog/post1 but drops https://example.com/about.
pub fn normalize_and_filter(origin: &str, hrefs: &[String], seed: &str) -> HashSet<String> {
    hrefs
        .iter()
        .filter_map(|href| resolve(origin, href))
        .filter(|address| address.starts_with(seed))
        .collect()
}

fn resolve(origin: &str, href: &str) -> Option<String> {
    if href.starts_with('/') {
        Some(format!("{origin}{href}"))
    } else if href.starts_with("http") {
        Some(href.to_string())
    } else {
        None
    }
}
