use serde::{Deserialize, Serialize};

/// A normalized book as returned by the gateway's search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub first_publish_year: Option<u32>,
    pub publisher: String,
    pub subjects: Vec<String>,
    pub cover_id: Option<u64>,
    pub key: String,
}

impl Book {
    pub fn cover_url_medium(&self) -> Option<String> {
        self.cover_id
            .map(|id| format!("https://covers.openlibrary.org/b/id/{}-M.jpg", id))
    }

    pub fn cover_url_large(&self) -> Option<String> {
        self.cover_id
            .map(|id| format!("https://covers.openlibrary.org/b/id/{}-L.jpg", id))
    }

    pub fn permalink(&self) -> String {
        format!("https://openlibrary.org{}", self.key)
    }
}

#[derive(Debug, Serialize)]
pub struct DescribeRequest {
    pub title: String,
    pub author: Option<String>,
    pub subjects: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct DescribeResponse {
    pub description: String,
}
