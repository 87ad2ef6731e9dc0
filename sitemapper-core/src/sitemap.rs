//! Sitemap rendering.
//!
//! Paths are expanded to absolute URLs on the crawled site and written as a
//! `<urlset>` document in the sitemaps.org 0.9 namespace, or as plain text
//! or JSON for scripting.

use crate::error::{Result, SitemapError};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use serde::{Deserialize, Serialize};
use sitemapper_scanner::{Path, SiteReference};
use std::fs::File;
use std::io::Write;
use tracing::debug;

pub const SITEMAP_XMLNS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SitemapFormat {
    #[default]
    Xml,
    Text,
    Json,
}

impl SitemapFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "xml" => Some(SitemapFormat::Xml),
            "text" | "txt" => Some(SitemapFormat::Text),
            "json" => Some(SitemapFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SitemapOptions {
    pub format: SitemapFormat,
    /// Sort paths lexicographically. Otherwise input order is kept.
    pub sort: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSitemap {
    pub site: String,
    pub urls: Vec<String>,
}

/// Expand site-relative paths to `scheme://host[:port]/path` URLs.
pub fn absolute_urls(paths: &[Path], site: &SiteReference, sort: bool) -> Vec<String> {
    let mut ordered: Vec<&Path> = paths.iter().collect();
    if sort {
        ordered.sort();
    }
    ordered.into_iter().map(|path| site.absolute(path)).collect()
}

pub fn render_sitemap(
    paths: &[Path],
    site: &SiteReference,
    options: &SitemapOptions,
) -> Result<String> {
    let urls = absolute_urls(paths, site, options.sort);
    debug!("Rendering {} URLs as {:?}", urls.len(), options.format);

    match options.format {
        SitemapFormat::Xml => generate_xml_sitemap(&urls),
        SitemapFormat::Text => Ok(generate_text_sitemap(&urls)),
        SitemapFormat::Json => generate_json_sitemap(site, urls),
    }
}

pub fn generate_xml_sitemap(urls: &[String]) -> Result<String> {
    let mut buffer = Vec::new();
    write_xml_sitemap(urls, &mut buffer)?;
    String::from_utf8(buffer).map_err(xml_error)
}

/// Write a `<urlset>` with one `<url><loc>..</loc></url>` per entry.
pub fn write_xml_sitemap<W: Write>(urls: &[String], writer: W) -> Result<()> {
    let mut xml = Writer::new_with_indent(writer, b' ', 2);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_error)?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_XMLNS));
    xml.write_event(Event::Start(urlset)).map_err(xml_error)?;

    for url in urls {
        xml.write_event(Event::Start(BytesStart::new("url")))
            .map_err(xml_error)?;
        xml.write_event(Event::Start(BytesStart::new("loc")))
            .map_err(xml_error)?;
        xml.write_event(Event::Text(BytesText::new(url)))
            .map_err(xml_error)?;
        xml.write_event(Event::End(BytesEnd::new("loc")))
            .map_err(xml_error)?;
        xml.write_event(Event::End(BytesEnd::new("url")))
            .map_err(xml_error)?;
    }

    xml.write_event(Event::End(BytesEnd::new("urlset")))
        .map_err(xml_error)?;

    let mut inner = xml.into_inner();
    inner.write_all(b"\n")?;
    Ok(())
}

pub fn generate_text_sitemap(urls: &[String]) -> String {
    let mut out = String::new();
    for url in urls {
        out.push_str(url);
        out.push('\n');
    }
    out
}

pub fn generate_json_sitemap(site: &SiteReference, urls: Vec<String>) -> Result<String> {
    let document = JsonSitemap {
        site: site.origin(),
        urls,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

pub fn save_sitemap(content: &str, path: &std::path::Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

fn xml_error(e: impl std::fmt::Display) -> SitemapError {
    SitemapError::Xml(e.to_string())
}
