use crate::error::ServiceError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

const GEMINI_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

/// Prompt for an ~100-word reader-facing description. The author clause is
/// appended only when an author is known, the subjects clause only when the
/// subject list is non-empty. The word target is advisory; the provider's
/// output is returned verbatim.
pub fn build_prompt(title: &str, author: Option<&str>, subjects: &[String]) -> String {
    let mut prompt = format!(
        "Write a concise and engaging description (about 100 words) for the book \"{}\"",
        title
    );
    if let Some(author) = author {
        prompt.push_str(&format!(" by {}", author));
    }
    if !subjects.is_empty() {
        prompt.push_str(&format!(
            " that covers topics like {}",
            subjects.join(", ")
        ));
    }
    prompt.push_str(". Make it sound professional and appealing to potential readers.");
    prompt
}

#[async_trait]
pub trait DescriptionProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ServiceError>;
}

// Wire types for the generateContent REST call.
#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

pub struct GeminiProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeminiProvider {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: GEMINI_URL.to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl DescriptionProvider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ServiceError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            ServiceError::UpstreamUnavailable("GEMINI_APIKEY is not configured".to_string())
        })?;

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&self.base_url)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|e| ServiceError::UpstreamUnavailable(format!("Gemini: {}", e)))?;

        if !response.status().is_success() {
            return Err(ServiceError::UpstreamUnavailable(format!(
                "Gemini responded with status {}",
                response.status()
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::UpstreamUnavailable(format!("Gemini: {}", e)))?;

        body.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| {
                ServiceError::UpstreamUnavailable("Gemini returned no candidates".to_string())
            })
    }
}

/// Builds the prompt for a describe request and forwards it. Title is
/// required and checked before any network call.
pub async fn describe_book(
    title: Option<&str>,
    author: Option<&str>,
    subjects: &[String],
    provider: &(dyn DescriptionProvider + Send + Sync),
) -> Result<String, ServiceError> {
    let title = match title {
        Some(t) if !t.trim().is_empty() => t,
        _ => {
            return Err(ServiceError::InvalidInput(
                "Book title is required".to_string(),
            ))
        }
    };

    let prompt = build_prompt(title, author, subjects);
    info!("Requesting description for '{}'", title);
    provider.generate(&prompt).await
}
