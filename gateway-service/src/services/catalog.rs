use crate::error::ServiceError;
use crate::models::book::{BookRecord, BookViewModel, OpenLibraryResponse};
use async_trait::async_trait;
use tracing::info;

const OPEN_LIBRARY_URL: &str = "https://openlibrary.org/search.json";

#[async_trait]
pub trait BookProvider {
    async fn search(&self, query: &str) -> Result<Vec<BookRecord>, ServiceError>;
}

pub struct OpenLibraryProvider {
    client: reqwest::Client,
    base_url: String,
}

impl OpenLibraryProvider {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: OPEN_LIBRARY_URL.to_string(),
        }
    }
}

impl Default for OpenLibraryProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookProvider for OpenLibraryProvider {
    async fn search(&self, query: &str) -> Result<Vec<BookRecord>, ServiceError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| ServiceError::UpstreamUnavailable(format!("Open Library: {}", e)))?;

        if !response.status().is_success() {
            return Err(ServiceError::UpstreamUnavailable(format!(
                "Open Library responded with status {}",
                response.status()
            )));
        }

        let body: OpenLibraryResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::UpstreamUnavailable(format!("Open Library: {}", e)))?;

        Ok(body.docs)
    }
}

/// Searches the catalog and normalizes every usable record, preserving
/// provider order. Blank queries are rejected before any network call.
pub async fn search_catalog(
    query: &str,
    provider: &(dyn BookProvider + Send + Sync),
) -> Result<Vec<BookViewModel>, ServiceError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ServiceError::InvalidInput(
            "Search query is required".to_string(),
        ));
    }

    let records = provider.search(query).await?;
    let books: Vec<BookViewModel> = records
        .into_iter()
        .filter_map(BookViewModel::from_record)
        .collect();

    info!("Query '{}' returned {} books", query, books.len());
    Ok(books)
}
