//! Generated site files: sitemap and web app manifest.

pub mod manifest;
pub mod sitemap;
