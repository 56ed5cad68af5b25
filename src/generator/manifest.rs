//! Web app manifest generation.
//!
//! Writes `manifest.webmanifest` from `[manifest]` and copies the icon
//! next to it.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs, path::Path};

#[derive(Debug, Serialize)]
struct WebManifest<'a> {
    name: &'a str,
    short_name: &'a str,
    start_url: &'a str,
    background_color: &'a str,
    theme_color: &'a str,
    display: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    icons: Vec<ManifestIcon>,
}

#[derive(Debug, Serialize)]
struct ManifestIcon {
    src: String,
    sizes: &'static str,
    #[serde(rename = "type")]
    mime: &'static str,
}

/// Build the manifest if enabled in config.
pub fn build_manifest(config: &SiteConfig) -> Result<()> {
    if !config.manifest.enable {
        return Ok(());
    }

    let output = &config.build.output;
    let icons = match config.manifest.icon.as_deref() {
        Some(icon) => vec![copy_icon(icon, output)?],
        None => Vec::new(),
    };

    let json = render_manifest(config, icons)?;
    let path = &config.manifest.path;
    fs::write(path, json)
        .with_context(|| format!("Failed to write manifest to {}", path.display()))?;

    log!("manifest"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}

fn render_manifest(config: &SiteConfig, icons: Vec<ManifestIcon>) -> Result<String> {
    let manifest = &config.manifest;
    let name = non_empty_or(&manifest.name, &config.base.title);
    let short_name = non_empty_or(&manifest.short_name, name);

    let json = serde_json::to_string_pretty(&WebManifest {
        name,
        short_name,
        start_url: &manifest.start_url,
        background_color: &manifest.background_color,
        theme_color: &manifest.theme_color,
        display: &manifest.display,
        icons,
    })?;
    Ok(json)
}

/// Copy the icon into the output root and describe it.
fn copy_icon(icon: &Path, output: &Path) -> Result<ManifestIcon> {
    let file_name = icon
        .file_name()
        .with_context(|| format!("[manifest.icon] `{}` has no file name", icon.display()))?;
    let target = output.join(file_name);
    fs::copy(icon, &target).with_context(|| {
        format!("Failed to copy {} to {}", icon.display(), target.display())
    })?;

    let (sizes, mime) = icon_kind(icon);
    Ok(ManifestIcon {
        src: format!("/{}", file_name.to_string_lossy()),
        sizes,
        mime,
    })
}

/// Vector icons scale to any size; raster icons are declared by the browser.
fn icon_kind(icon: &Path) -> (&'static str, &'static str) {
    let ext = icon
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("svg") => ("any", "image/svg+xml"),
        Some("png") => ("512x512", "image/png"),
        Some("webp") => ("512x512", "image/webp"),
        Some("ico") => ("48x48", "image/x-icon"),
        _ => ("any", "application/octet-stream"),
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
