// Catalog query service
// Re-derives the visible, sorted list of clips from the current search text

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;

use crate::catalog::{AssetCatalog, AudioAsset};

/// Assets whose display name contains `query`, ignoring case.
/// An empty query matches everything; catalog order is preserved.
pub fn filter<'a>(query: &str, catalog: &'a AssetCatalog) -> Vec<&'a AudioAsset> {
    let needle = query.to_lowercase();
    catalog
        .list_sorted()
        .filter(|asset| asset.search_key().contains(needle.as_str()))
        .collect()
}

/// One visible button: the clip it plays and the label it shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardEntry {
    pub key: String,
    pub label: String,
}

/// The visible board for one query. Rebuilt whole on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub query: String,
    pub entries: Vec<BoardEntry>,
}

impl BoardView {
    fn build(query: &str, catalog: &AssetCatalog) -> Self {
        let entries = filter(query, catalog)
            .into_iter()
            .map(|asset| BoardEntry {
                key: asset.key().to_string(),
                label: asset.display_name().to_string(),
            })
            .collect();
        Self {
            query: query.to_string(),
            entries,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }
}

pub struct QueryService {
    catalog: Arc<AssetCatalog>,
    view: Mutex<BoardView>,
}

impl QueryService {
    pub fn new(catalog: Arc<AssetCatalog>) -> Self {
        let view = BoardView::build("", &catalog);
        Self {
            catalog,
            view: Mutex::new(view),
        }
    }

    /// Replace the query text and return the freshly built view
    pub fn set_query(&self, text: &str) -> BoardView {
        let view = BoardView::build(text, &self.catalog);
        log::debug!("[Query] {:?} -> {} entries", text, view.entries.len());
        *self.view.lock() = view.clone();
        view
    }

    pub fn query(&self) -> String {
        self.view.lock().query.clone()
    }

    pub fn view(&self) -> BoardView {
        self.view.lock().clone()
    }
}
