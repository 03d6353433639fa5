// src/sitemap.rs
// =============================================================================
// Renders the crawled pages as a sitemap document:
//
//   <?xml version="1.0" encoding="UTF-8"?>
//   <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//     <url>
//       <loc>https://example.com</loc>
//     </url>
//   </urlset>
//
// The layout is described with serde structs and written by quick-xml.
// =============================================================================

use quick_xml::se::Serializer;
use serde::Serialize;

use crate::error::SitemapError;

pub const XMLNS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

// Field order matters: quick-xml writes attributes ("@" prefix) on the
// opening tag, so they must come before child elements.
#[derive(Serialize)]
#[serde(rename = "urlset")]
struct UrlSet<'a> {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    #[serde(rename = "url")]
    urls: Vec<Loc<'a>>,
}

#[derive(Serialize)]
struct Loc<'a> {
    loc: &'a str,
}

/// Renders a complete sitemap document, trailing newline included.
///
/// Addresses are sorted so the same crawl always prints the same file.
pub fn render_sitemap<I, S>(addresses: I) -> Result<String, SitemapError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut addresses: Vec<S> = addresses.into_iter().collect();
    addresses.sort_by(|a, b| a.as_ref().cmp(b.as_ref()));

    let urlset = UrlSet {
        xmlns: XMLNS,
        urls: addresses
            .iter()
            .map(|address| Loc {
                loc: address.as_ref(),
            })
            .collect(),
    };

    let mut out = String::from(XML_HEADER);
    let mut serializer = Serializer::with_root(&mut out, Some("urlset"))?;
    serializer.indent(' ', 2);
    urlset.serialize(serializer)?;
    out.push('\n');

    Ok(out)
}
