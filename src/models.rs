use serde::{Deserialize, Serialize};

/// Request payload for the chat endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
}

/// Response payload for the chat endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}

/// Response payload for the health check endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

impl ChatRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    /// Validates if the query is not empty or just whitespace
    pub fn is_valid(&self) -> bool {
        !self.query.trim().is_empty()
    }
}

impl ChatResponse {
    pub fn new(answer: String) -> Self {
        Self { answer }
    }

    /// Placeholder answer until retrieval is wired in
    pub fn echo(query: &str) -> Self {
        Self::new(format!(
            "Du hast gefragt: '{}'. RAG-Antwort kommt später",
            query
        ))
    }
}
