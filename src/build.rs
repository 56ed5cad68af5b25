//! Site building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── prepare_output()    ──► create / clean the output directory
//!     │
//!     ├── pages::discover()   ──► content/*.md(x) → Pages
//!     │
//!     └── rayon::join
//!             ├── build_sitemap()   ──► sitemap.xml
//!             ├── build_manifest()  ──► manifest.webmanifest (+ icon)
//!             └── build_noflash()   ──► noflash.js
//! ```

use crate::{
    config::SiteConfig,
    generator::{manifest::build_manifest, sitemap::build_sitemap},
    log,
    pages::{self, Pages},
    theme::build_noflash,
};
use anyhow::{Context, Result, anyhow};
use std::{fs, path::Path};

/// Build the site outputs and return the discovered pages.
///
/// If `config.build.clean` is true, clears the entire output directory first.
pub fn build_site(config: &SiteConfig) -> Result<Pages> {
    prepare_output(&config.build.output, config.build.clean)?;

    let pages = pages::discover(&config.build.content, &config.i18n)?;
    log!("pages"; "found {} pages", pages.len());

    let (sitemap_result, (manifest_result, noflash_result)) = rayon::join(
        || build_sitemap(config, &pages),
        || rayon::join(|| build_manifest(config), || build_noflash(config)),
    );

    let mut failed = false;
    for (name, result) in [
        ("sitemap", sitemap_result),
        ("manifest", manifest_result),
        ("theme", noflash_result),
    ] {
        if let Err(e) = result {
            log!("error"; "{name}: {e:#}");
            failed = true;
        }
    }
    if failed {
        return Err(anyhow!("Build failed"));
    }

    log!("build"; "done");
    Ok(pages)
}

/// Ensure the output directory exists; remove its content first when `clean`.
fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output).with_context(|| {
            format!("Failed to clear output directory: {}", output.display())
        })?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}
