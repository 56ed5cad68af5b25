//! Import of an exported page graph.
//!
//! Accepts the result of an `allSitePage` query, with or without the
//! surrounding `data` object, or a bare array of nodes:
//!
//! ```json
//! { "data": { "allSitePage": { "nodes": [
//!   { "path": "/ja/about/", "context": { "locale": "ja", "originalPath": "/about/" } }
//! ] } } }
//! ```

use super::{Page, Pages};
use crate::config::I18nConfig;
use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum QueryDocument {
    Data { data: QueryData },
    Root(QueryData),
    Nodes(Vec<PageNode>),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QueryData {
    all_site_page: NodeList,
}

#[derive(Debug, Deserialize)]
struct NodeList {
    nodes: Vec<PageNode>,
}

#[derive(Debug, Deserialize)]
struct PageNode {
    path: String,
    #[serde(default)]
    context: Option<PageContext>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageContext {
    #[serde(default)]
    locale: Option<String>,
    #[serde(default)]
    original_path: Option<String>,
}

/// Parse a page graph; nodes keep their order.
///
/// A node without a locale is attributed to the default language.
pub fn from_query_json(content: &str, i18n: &I18nConfig) -> Result<Pages> {
    let document: QueryDocument =
        serde_json::from_str(content).context("Failed to parse page graph")?;
    let nodes = match document {
        QueryDocument::Data { data } | QueryDocument::Root(data) => data.all_site_page.nodes,
        QueryDocument::Nodes(nodes) => nodes,
    };

    let items = nodes
        .into_iter()
        .map(|node| {
            let context = node.context.unwrap_or_default();
            Page {
                path: node.path,
                locale: context.locale.unwrap_or_else(|| i18n.default_lang.clone()),
                original_path: context.original_path,
            }
        })
        .collect();

    Ok(Pages { items })
}
