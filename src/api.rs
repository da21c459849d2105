use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::models::{ChatRequest, ChatResponse, HealthResponse};

/// Fixed prefix of every backend route
pub const BASE_PATH: &str = "/api";

/// Outbound calls to the SoupMate backend.
///
/// Components receive this capability at construction time, so tests can
/// hand them a fake instead of a live backend.
#[async_trait]
pub trait ApiService: Send + Sync {
    async fn get_health(&self) -> Result<HealthResponse, ApiError>;

    async fn ask_soupmate(&self, query: &str) -> Result<ChatResponse, ApiError>;
}

/// `ApiService` backed by reqwest. No retries and no timeout are applied.
#[derive(Debug, Clone)]
pub struct HttpApiService {
    client: Client,
    base: String,
}

impl HttpApiService {
    /// `origin` is the scheme/host/port of the backend, e.g. `http://localhost:8000`
    pub fn new(origin: &str) -> Self {
        Self::with_client(Client::new(), origin)
    }

    pub fn with_client(client: Client, origin: &str) -> Self {
        Self {
            client,
            base: format!("{}{}", origin.trim_end_matches('/'), BASE_PATH),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

async fn handle_response<T: DeserializeOwned>(
    resp: reqwest::Response,
    url: &str,
) -> Result<T, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        warn!("{} returned {}: {}", url, status, body);
        return Err(ApiError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            body,
        });
    }
    resp.json::<T>().await.map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}

#[async_trait]
impl ApiService for HttpApiService {
    async fn get_health(&self) -> Result<HealthResponse, ApiError> {
        let url = self.url("/health");
        debug!("GET {}", url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;
        handle_response(resp, &url).await
    }

    async fn ask_soupmate(&self, query: &str) -> Result<ChatResponse, ApiError> {
        let url = self.url("/chat");
        debug!("POST {} query={:?}", url, query);
        let resp = self
            .client
            .post(&url)
            .json(&ChatRequest::new(query))
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;
        handle_response(resp, &url).await
    }
}
