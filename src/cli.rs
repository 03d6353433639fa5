// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The tool takes a starting URL and a maximum depth. Everything else has a
// sensible default, so `sitemap-builder --url https://example.com` is enough.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;
use tracing::Level;

/// Site we crawl when no --url is given
pub const DEFAULT_URL: &str = "https://gophercises.com";

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "sitemap-builder",
    version = "0.1.0",
    about = "Crawls a website and prints a sitemap.xml for it",
    long_about = "sitemap-builder follows same-site links breadth-first from a starting URL \
                  and writes every page it visited as a sitemap document on stdout."
)]
pub struct Cli {
    /// URL to create the sitemap for
    ///
    /// Only links that start with this exact string are followed, so
    /// https://example.com/blog keeps the crawl inside /blog.
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// The maximum number of links deep to traverse
    ///
    /// Depth 0 = visit nothing
    /// Depth 1 = just the starting page
    /// Depth 2 = starting page + all pages it links to
    #[arg(long, default_value_t = 3)]
    pub depth: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Maps the number of -v flags to a tracing level
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. default_value vs default_value_t?
//    - default_value takes a string that clap parses like user input
//    - default_value_t takes an already-typed value (usize, u64, ...)
//
// 2. What is ArgAction::Count?
//    - Each repetition of the flag adds one: -vv gives verbose = 2
//
// 3. Why usize for depth?
//    - It can never be negative, so clap rejects "-1" for us
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["sitemap-builder"]);
        assert_eq!(cli.url, DEFAULT_URL);
        assert_eq!(cli.depth, 3);
        assert_eq!(cli.timeout, 10);
        assert_eq!(cli.log_level(), Level::WARN);
    }

    #[test]
    fn test_explicit_flags() {
        let cli = Cli::parse_from([
            "sitemap-builder",
            "--url",
            "https://example.com/blog",
            "--depth",
            "0",
            "-vv",
        ]);
        assert_eq!(cli.url, "https://example.com/blog");
        assert_eq!(cli.depth, 0);
        assert_eq!(cli.log_level(), Level::DEBUG);
    }

    #[test]
    fn test_negative_depth_rejected() {
        let result = Cli::try_parse_from(["sitemap-builder", "--depth", "-1"]);
        assert!(result.is_err());
    }
}
