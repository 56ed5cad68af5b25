//! Minification of generated XML.
//!
//! Enabled or disabled through `[build].minify`.

use crate::config::SiteConfig;
use std::borrow::Cow;

/// Minify XML according to config.
///
/// Returns `Cow::Borrowed` if minify disabled, `Cow::Owned` if minified.
pub fn minify_xml<'a>(xml: &'a [u8], config: &SiteConfig) -> Cow<'a, [u8]> {
    if config.build.minify {
        Cow::Owned(minify_xml_inner(xml))
    } else {
        Cow::Borrowed(xml)
    }
}

/// Minify XML by removing indentation and line breaks between elements.
fn minify_xml_inner(xml: &[u8]) -> Vec<u8> {
    let xml_str = String::from_utf8_lossy(xml);
    xml_str
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("")
        .into_bytes()
}
