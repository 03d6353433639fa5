// src/crawl/fetch.rs
// =============================================================================
// This module downloads pages.
//
// The crawler doesn't care HOW a page is fetched, only that it gets back:
// - the origin (scheme + host) of where the page actually ended up
// - the raw HTML bytes
//
// That contract is the `Fetcher` trait. `HttpFetcher` is the real one, built on
// reqwest. Tests plug in a fake that serves pages from a HashMap.
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::trace;
use url::Url;

use crate::error::FetchError;

const USER_AGENT: &str = concat!("sitemap-builder/", env!("CARGO_PKG_VERSION"));

/// A successfully downloaded page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// scheme://host[:port] of the final address, after redirects
    pub origin: String,
    /// Raw response body
    pub body: Vec<u8>,
}

/// Anything that can turn an address into a page
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, address: &str) -> Result<FetchedPage, FetchError>;
}

/// Fetches pages over HTTP(S) with reqwest
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds the HTTP client once; it is reused for every page
    /// (connection pooling)
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, address: &str) -> Result<FetchedPage, FetchError> {
        // reqwest follows redirects on its own, so response.url() is the
        // final address. Status codes are not checked: a 404 page
        // still has a body with links in it.
        let response = self
            .client
            .get(address)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                address: address.to_string(),
                source: e.into(),
            })?;

        trace!(%address, status = %response.status(), final_url = %response.url(), "got response");

        let origin = origin_of(response.url()).ok_or_else(|| FetchError::NoOrigin {
            address: address.to_string(),
            resolved: response.url().to_string(),
        })?;

        let body = response.bytes().await.map_err(|e| FetchError::Body {
            address: address.to_string(),
            source: e.into(),
        })?;

        Ok(FetchedPage {
            origin,
            body: body.to_vec(),
        })
    }
}

// Reduces a URL to scheme://host[:port]
//
// Url::port() is None when the port is the scheme's default, so
// https://example.com:443/x becomes https://example.com
fn origin_of(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_origin_drops_path_and_query() {
        let url = Url::parse("https://example.com/blog/post?id=1#top").unwrap();
        assert_eq!(origin_of(&url), Some("https://example.com".to_string()));
    }

    #[test]
    fn test_origin_keeps_non_default_port() {
        let url = Url::parse("http://127.0.0.1:8080/a").unwrap();
        assert_eq!(origin_of(&url), Some("http://127.0.0.1:8080".to_string()));
    }

    #[test]
    fn test_origin_drops_default_port() {
        let url = Url::parse("https://example.com:443/a").unwrap();
        assert_eq!(origin_of(&url), Some("https://example.com".to_string()));
    }

    #[test]
    fn test_origin_none_without_host() {
        let url = Url::parse("mailto:a@b.com").unwrap();
        assert_eq!(origin_of(&url), None);
    }

    #[tokio::test]
    async fn test_fetch_returns_body_and_origin() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<a href=\"/x\">x</a>"))
            .mount(&server)
            .await;

        let page = fetcher()
            .fetch(&format!("{}/page", server.uri()))
            .await
            .unwrap();

        assert_eq!(page.origin, server.uri());
        assert_eq!(page.body, b"<a href=\"/x\">x</a>".to_vec());
    }

    #[tokio::test]
    async fn test_fetch_treats_error_status_as_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
            .mount(&server)
            .await;

        let page = fetcher()
            .fetch(&format!("{}/missing", server.uri()))
            .await
            .unwrap();

        assert_eq!(page.body, b"not here".to_vec());
    }

    #[tokio::test]
    async fn test_fetch_origin_follows_redirect() {
        let landing = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/landing"))
            .respond_with(ResponseTemplate::new(200).set_body_string("landed"))
            .mount(&landing)
            .await;

        let start = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(301)
                    .insert_header("location", format!("{}/landing", landing.uri()).as_str()),
            )
            .mount(&start)
            .await;

        let page = fetcher().fetch(&start.uri()).await.unwrap();

        assert_eq!(page.origin, landing.uri());
        assert_eq!(page.body, b"landed".to_vec());
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_transport_error() {
        // Nothing listens on port 1
        let result = fetcher().fetch("http://127.0.0.1:1/").await;
        assert!(matches!(result, Err(FetchError::Transport { .. })));
    }
}
