use crate::models::{Book, DescribeRequest, DescribeResponse};
use reqwest::Client;

pub struct GatewayClient {
    client: Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub async fn search(
        &self,
        query: &str,
    ) -> Result<Vec<Book>, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/api/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("query", query)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(format!("Search failed with status {}", response.status()).into());
        }

        let books: Vec<Book> = response.json().await?;
        Ok(books)
    }

    pub async fn describe(
        &self,
        book: &Book,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/api/describe-book", self.base_url);
        let request = DescribeRequest {
            title: book.title.clone(),
            author: Some(book.author.clone()),
            subjects: book.subjects.clone(),
        };

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(format!("Describe failed with status {}", response.status()).into());
        }

        let body: DescribeResponse = response.json().await?;
        Ok(body.description)
    }
}
