//! Pre-paint theme script.
//!
//! Loaded blocking in `<head>`, it puts the stored (or system) theme class on
//! the root element before the first paint. It reads the same key and value
//! encoding as [`DarkModeController`](super::DarkModeController).

use crate::{
    config::{SiteConfig, ThemeConfig},
    log,
};
use anyhow::{Context, Result};
use std::fs;

/// Render the script for the configured key and classes.
pub fn noflash_script(theme: &ThemeConfig) -> Result<String> {
    let key = serde_json::to_string(&theme.storage_key)?;
    let dark = serde_json::to_string(&theme.class_dark)?;
    let light = serde_json::to_string(&theme.class_light)?;

    Ok(format!(
        "(function(){{\
var k={key},d={dark},l={light},c=document.documentElement.classList,s=null;\
try{{s=localStorage.getItem(k)}}catch(e){{}}\
var v=window.matchMedia(\"(prefers-color-scheme: dark)\").matches;\
if(s!==null){{try{{var p=JSON.parse(s);if(typeof p===\"boolean\")v=p}}catch(e){{}}}}\
c.add(v?d:l);c.remove(v?l:d)\
}})();\n"
    ))
}

/// Write the script into the output directory if enabled.
pub fn build_noflash(config: &SiteConfig) -> Result<()> {
    if !config.theme.noflash {
        return Ok(());
    }

    let path = &config.theme.noflash_path;
    let script = noflash_script(&config.theme)?;
    fs::write(path, script).with_context(|| format!("Failed to write {}", path.display()))?;

    log!("theme"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}
