use std::fs;
use std::path::PathBuf;
use tracing::warn;

const MAX_RECENT: usize = 5;

/// Key-value blob storage for the recent-search list. One key, one JSON
/// array of strings, mirroring the browser's localStorage entry.
pub trait SearchStore {
    fn load(&self) -> Option<String>;
    fn save(&self, blob: &str);
}

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SearchStore for FileStore {
    fn load(&self) -> Option<String> {
        fs::read_to_string(&self.path).ok()
    }

    fn save(&self, blob: &str) {
        if let Err(e) = fs::write(&self.path, blob) {
            warn!("Failed to save recent searches: {}", e);
        }
    }
}

/// At most 5 distinct terms, most-recent-first. Recording a known term
/// moves it to the front; the oldest entry falls off on overflow.
pub struct RecentSearches {
    terms: Vec<String>,
}

impl RecentSearches {
    pub fn load(store: &dyn SearchStore) -> Self {
        let terms = store
            .load()
            .and_then(|blob| serde_json::from_str(&blob).ok())
            .unwrap_or_default();
        Self { terms }
    }

    pub fn record(&mut self, term: &str, store: &dyn SearchStore) {
        self.terms.retain(|t| t != term);
        self.terms.insert(0, term.to_string());
        self.terms.truncate(MAX_RECENT);

        match serde_json::to_string(&self.terms) {
            Ok(blob) => store.save(&blob),
            Err(e) => warn!("Failed to serialize recent searches: {}", e),
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }
}
