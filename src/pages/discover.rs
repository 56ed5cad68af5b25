//! Page discovery from the content directory.

use super::{Page, Pages, localize_path};
use crate::{config::I18nConfig, log};
use anyhow::{Context, Result, bail};
use rustc_hash::FxHashSet;
use std::path::Path;
use walkdir::WalkDir;

/// Source extensions that produce pages.
const PAGE_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Scan `content_dir` for Markdown / MDX sources and derive their pages.
///
/// Pages are ordered by original path, then by the position of their
/// locale in `[i18n].locales`.
pub fn discover(content_dir: &Path, i18n: &I18nConfig) -> Result<Pages> {
    if !content_dir.is_dir() {
        bail!("content directory `{}` not found", content_dir.display());
    }

    let mut items = Vec::new();
    for entry in WalkDir::new(content_dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", content_dir.display()))?;
        let path = entry.path();
        let is_page = entry.file_type().is_file()
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| PAGE_EXTENSIONS.contains(&ext));
        if !is_page {
            continue;
        }

        let Ok(relative) = path.strip_prefix(content_dir) else {
            continue;
        };
        if let Some(page) = page_from_relative(relative, i18n) {
            items.push(page);
        }
    }

    items.sort_by_cached_key(|page| {
        let rank = i18n
            .locales
            .iter()
            .position(|locale| *locale == page.locale)
            .unwrap_or(usize::MAX);
        (page.original_path.clone(), rank)
    });
    warn_duplicates(&items);

    Ok(Pages { items })
}

/// Derive a page from a source path relative to the content directory.
fn page_from_relative(relative: &Path, i18n: &I18nConfig) -> Option<Page> {
    let stem = relative.file_stem()?.to_str()?;
    let (name, locale) = match stem.rsplit_once('.') {
        Some((name, suffix)) if i18n.is_locale(suffix) => (name, suffix),
        _ => (stem, i18n.default_lang.as_str()),
    };

    let mut segments: Vec<&str> = relative
        .parent()
        .into_iter()
        .flat_map(|parent| parent.iter())
        .filter_map(|segment| segment.to_str())
        .collect();
    if name != "index" {
        segments.push(name);
    }

    let original_path = if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", segments.join("/"))
    };
    let path = localize_path(&original_path, locale, i18n);

    Some(Page::new(path, locale, original_path))
}

/// Two sources rendering to the same page yield duplicate alternates.
fn warn_duplicates(items: &[Page]) {
    let mut seen = FxHashSet::default();
    for page in items {
        if !seen.insert(page.path.as_str()) {
            log!("warn"; "`{}` is produced by more than one source", page.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "# title").unwrap();
    }

    #[test]
    fn test_page_from_relative_index() {
        let i18n = I18nConfig::default();
        let page = page_from_relative(Path::new("posts/hello/index.mdx"), &i18n).unwrap();
        assert_eq!(page, Page::new("/posts/hello/", "en", "/posts/hello/"));
    }

    #[test]
    fn test_page_from_relative_locale_suffix() {
        let i18n = I18nConfig::default();
        let page = page_from_relative(Path::new("posts/hello/index.ja.mdx"), &i18n).unwrap();
        assert_eq!(page, Page::new("/ja/posts/hello/", "ja", "/posts/hello/"));
    }

    #[test]
    fn test_page_from_relative_named_file() {
        let i18n = I18nConfig::default();
        let page = page_from_relative(Path::new("about.ja.md"), &i18n).unwrap();
        assert_eq!(page, Page::new("/ja/about/", "ja", "/about/"));
    }

    #[test]
    fn test_page_from_relative_unknown_suffix_is_part_of_name() {
        let i18n = I18nConfig::default();
        let page = page_from_relative(Path::new("release.v2.md"), &i18n).unwrap();
        assert_eq!(page, Page::new("/release.v2/", "en", "/release.v2/"));
    }

    #[test]
    fn test_page_from_relative_root_index() {
        let i18n = I18nConfig::default();
        let page = page_from_relative(Path::new("index.ja.md"), &i18n).unwrap();
        assert_eq!(page, Page::new("/ja/", "ja", "/"));
    }

    #[test]
    fn test_discover_orders_by_original_path_then_locale() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "posts/hello/index.ja.mdx");
        touch(dir.path(), "posts/hello/index.mdx");
        touch(dir.path(), "about.md");
        touch(dir.path(), "posts/hello/cover.png");

        let pages = discover(dir.path(), &I18nConfig::default()).unwrap();
        let paths: Vec<_> = pages.iter().map(|p| p.path.as_str()).collect();

        assert_eq!(paths, vec!["/about/", "/posts/hello/", "/ja/posts/hello/"]);
    }

    #[test]
    fn test_discover_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = discover(&dir.path().join("missing"), &I18nConfig::default());
        assert!(result.is_err());
    }
}
