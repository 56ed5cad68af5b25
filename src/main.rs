//! Folio - sitemap, manifest and dark mode tooling for a bilingual blog.

mod build;
mod cli;
mod config;
mod generator;
mod init;
mod logger;
mod pages;
mod theme;
mod utils;

use anyhow::{Context, Result, bail};
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use generator::sitemap::write_sitemap;
use init::new_site;
use std::{
    fs,
    path::{Path, PathBuf},
};
use theme::{ClassList, DarkModeController, FileStore, ToggleView};

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static SiteConfig = Box::leak(Box::new(load_config(cli)?));

    match &cli.command {
        Commands::Init { name } => new_site(config, name.is_some()),
        Commands::Build { .. } => build_site(config).map(|_| ()),
        Commands::Sitemap { pages, out } => sitemap_from_query(config, pages, out.as_deref()),
        Commands::Theme { toggle, system_dark, .. } => show_theme(config, *toggle, *system_dark),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);

    // The theme command works on defaults when no site is configured
    let config_exists = config.config_path.exists();
    match (cli.is_init(), config_exists) {
        (true, true) => {
            bail!("Config file already exists. Remove it manually or init in a different path.")
        }
        (false, false) if !cli.is_theme() => bail!("Config file not found."),
        _ => {}
    }

    if !cli.is_init() {
        config.validate()?;
    }

    Ok(config)
}

/// Write a sitemap from an exported page graph.
fn sitemap_from_query(config: &SiteConfig, graph: &Path, out: Option<&Path>) -> Result<()> {
    let root = config.get_root();
    let pages_path = resolve_path(root, graph);
    let content = fs::read_to_string(&pages_path)
        .with_context(|| format!("Failed to read page graph {}", pages_path.display()))?;
    let pages = pages::from_query_json(&content, &config.i18n)
        .with_context(|| format!("Invalid page graph {}", pages_path.display()))?;
    log!("pages"; "loaded {} pages", pages.len());

    let target = match out {
        Some(out) => resolve_path(root, out),
        None => config.build.sitemap.path.clone(),
    };
    write_sitemap(config, &pages, &target)
}

/// Resolve the persisted preference, optionally flip it, and report it.
fn show_theme(config: &SiteConfig, toggle: bool, system_dark: bool) -> Result<()> {
    let theme = &config.theme;
    let store = FileStore::new(&theme.storage);
    let mut controller =
        DarkModeController::new(&theme.storage_key, theme.classes(), store, ClassList::new());

    controller.initialize(system_dark);
    if toggle {
        controller.toggle();
    }

    let preference = controller.current_value();
    log!("theme"; "{preference} (class=\"{}\")", controller.target().to_attr());
    if !controller.is_persistent() {
        log!("warn"; "{} is not writable", controller.store().path().display());
    }

    let view = ToggleView::from_preference(preference, theme.toggle_size);
    println!("{}", view.to_html()?);
    Ok(())
}

/// Relative command line paths are taken from the project root.
fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAPH: &str = r#"[
        { "path": "/about/", "context": { "locale": "en", "originalPath": "/about/" } },
        { "path": "/ja/about/", "context": { "locale": "ja", "originalPath": "/about/" } }
    ]"#;

    fn site(root: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.set_root(root);
        config.base.url = Some("https://example.com".into());
        config.build.sitemap.path = root.join("public/sitemap.xml");
        config
    }

    #[test]
    fn test_resolve_path() {
        let root = Path::new("/srv/site");
        assert_eq!(resolve_path(root, Path::new("graph.json")), root.join("graph.json"));
        assert_eq!(resolve_path(root, Path::new("/tmp/out.xml")), PathBuf::from("/tmp/out.xml"));
    }

    #[test]
    fn test_sitemap_from_query_resolves_against_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("graph.json"), GRAPH).unwrap();
        let config = site(dir.path());

        sitemap_from_query(
            &config,
            Path::new("graph.json"),
            Some(Path::new("dist/sitemap.xml")),
        )
        .unwrap();

        let xml = fs::read_to_string(dir.path().join("dist/sitemap.xml")).unwrap();
        assert!(xml.contains("<loc>https://example.com/ja/about/</loc>"));
        assert!(!config.build.sitemap.path.exists());
    }

    #[test]
    fn test_sitemap_from_query_default_target() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("graph.json"), GRAPH).unwrap();
        let config = site(dir.path());

        sitemap_from_query(&config, Path::new("graph.json"), None).unwrap();
        assert!(config.build.sitemap.path.is_file());
    }
}
