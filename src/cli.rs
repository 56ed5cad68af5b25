//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Folio site tooling CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Config file name (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Init a template site
    Init {
        /// the name(path) of site directory, related to `root`
        name: Option<PathBuf>,
    },

    /// Scan content and write sitemap, manifest and theme script
    Build {
        /// Clean output directory completely before building
        #[arg(long)]
        clean: bool,

        /// Minify the generated xml
        #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        minify: Option<bool>,

        /// enable sitemap generation
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        sitemap: Option<bool>,

        /// Override base URL for the site.
        ///
        /// Useful for CI/CD deployments where the production URL differs from local development.
        #[arg(long = "base-url")]
        base_url: Option<String>,
    },

    /// Write a sitemap from an exported page graph (JSON)
    Sitemap {
        /// Page graph file (relative to project root): `allSitePage` query result or a bare node array
        #[arg(short, long)]
        pages: PathBuf,

        /// Where to write the sitemap, relative to project root (default: `[build.sitemap].path`)
        #[arg(long = "out")]
        out: Option<PathBuf>,
    },

    /// Show or toggle the persisted dark mode preference
    Theme {
        /// Flip the preference and persist it
        #[arg(short, long)]
        toggle: bool,

        /// Report the system color scheme as dark when nothing is stored
        #[arg(long)]
        system_dark: bool,

        /// Storage file (default: `[theme].storage`)
        #[arg(short, long)]
        storage: Option<PathBuf>,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
    pub const fn is_theme(&self) -> bool {
        matches!(self.command, Commands::Theme { .. })
    }
}
