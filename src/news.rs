// Static news items embedded at build time. There is no network fetch for
// the list itself: the deck is a fixed, ordered, in-memory set of stories.

use serde::Deserialize;
use thiserror::Error;

/// One news story as shown on a card. Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub image_url: String,
    pub title: String,
    pub summary: String,
    pub news_source: String,
    pub website_url: String,
}

#[derive(Debug, Error)]
pub enum NewsError {
    #[error("news asset is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("news asset contains no items")]
    Empty,
}

const NEWS_JSON: &str = include_str!("../assets/news.json");

/// Fixed ordered list of news items, non-empty by construction.
pub struct NewsStore {
    items: Vec<NewsItem>,
}

impl NewsStore {
    /// Parse the embedded asset. An empty deck is a startup invariant
    /// violation, not a runtime condition; the caller aborts on it.
    pub fn load() -> Result<Self, NewsError> {
        Self::from_json(NEWS_JSON)
    }

    fn from_json(raw: &str) -> Result<Self, NewsError> {
        let items: Vec<NewsItem> = serde_json::from_str(raw)?;
        if items.is_empty() {
            return Err(NewsError::Empty);
        }
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn last_index(&self) -> usize {
        self.items.len() - 1
    }

    /// Item at `index`. Callers hold the carousel invariant
    /// `index < len()`, so direct indexing is fine here.
    pub fn item(&self, index: usize) -> &NewsItem {
        &self.items[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_asset_parses_and_is_non_empty() {
        let store = NewsStore::load().unwrap();
        assert!(store.len() > 0);
        let first = store.item(0);
        assert!(!first.title.is_empty());
        assert!(!first.website_url.is_empty());
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(
            NewsStore::from_json("[]"),
            Err(NewsError::Empty)
        ));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            NewsStore::from_json("{not json"),
            Err(NewsError::Malformed(_))
        ));
    }
}
