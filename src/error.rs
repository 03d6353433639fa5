// src/error.rs
// =============================================================================
// Typed errors for the two places where things can go wrong:
// - fetching one page (recoverable: the crawler logs it and moves on)
// - rendering the final sitemap (fatal: there is nothing to print)
// =============================================================================

use thiserror::Error;

/// Boxed cause for transport failures, so fake fetchers in tests can report
/// failures without a real network error
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Why a single page could not be fetched
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection, DNS, timeout or redirect-loop failure
    #[error("request to {address} failed: {source}")]
    Transport {
        address: String,
        #[source]
        source: BoxError,
    },

    /// The response arrived but its body could not be read
    #[error("reading body of {address} failed: {source}")]
    Body {
        address: String,
        #[source]
        source: BoxError,
    },

    /// The request ended up somewhere we can't build an origin for
    #[error("{address} resolved to {resolved}, which has no host")]
    NoOrigin { address: String, resolved: String },
}

#[derive(Error, Debug)]
pub enum SitemapError {
    #[error("failed to serialize sitemap: {0}")]
    Serialize(#[from] quick_xml::DeError),
}
