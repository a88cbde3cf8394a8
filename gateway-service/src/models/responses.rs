use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DescribeRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subjects: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DescribeResponse {
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
