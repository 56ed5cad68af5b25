//! Site initialization module.
//!
//! Creates a new site structure with default configuration.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Default config filename
const CONFIG_FILE: &str = "folio.toml";

/// Default site directory structure
const SITE_DIRS: &[&str] = &["content", "static"];

/// Starter page so the first build has something to index
const WELCOME_PAGE: &str = "---\ntitle: Hello\n---\n\nWelcome.\n";

/// Create a new site with default structure
pub fn new_site(config: &SiteConfig, has_name: bool) -> Result<()> {
    let root = config.get_root();

    // Without a name the site is created in place, which needs an empty directory
    if !has_name && !is_dir_empty(root)? {
        bail!(
            "Current directory is not empty. Use `folio init <SITE_NAME>` to create in a subdirectory."
        );
    }

    init_site_structure(root)?;
    init_default_config(root)?;
    init_ignored_files(root, &[config.build.output.as_path()])?;

    log!("init"; "created site at {}", root.display());
    Ok(())
}

/// Check if a directory is completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Write default configuration file
fn init_default_config(root: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(root.join(CONFIG_FILE), content)?;
    Ok(())
}

/// Create site directory structure
fn init_site_structure(root: &Path) -> Result<()> {
    for dir in SITE_DIRS {
        let path = root.join(dir);
        if path.exists() {
            bail!(
                "Path `{}` already exists. Try `folio init <SITE_NAME>` instead.",
                path.display()
            );
        }
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
    }
    fs::write(root.join("content/index.md"), WELCOME_PAGE)?;
    Ok(())
}

/// Initialize .gitignore and .ignore files with specified paths.
///
/// Paths under `root` are written relative to it.
fn init_ignored_files(root: &Path, paths: &[&Path]) -> Result<()> {
    let content = paths
        .iter()
        .map(|p| p.strip_prefix(root).unwrap_or(p))
        .filter_map(|p| p.to_str())
        .collect::<Vec<_>>()
        .join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)?;
        }
    }

    Ok(())
}
