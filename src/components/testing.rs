use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::api::ApiService;
use crate::error::ApiError;
use crate::models::{ChatResponse, HealthResponse};

/// In-memory backend for component tests.
///
/// `Err(status)` outcomes are reported as `ApiError::Status`.
pub struct FakeApi {
    pub health: Mutex<Result<String, u16>>,
    pub chat: Result<String, u16>,
    pub health_calls: AtomicUsize,
    pub chat_calls: Mutex<Vec<String>>,
    /// Chat calls for this query wait on the notify before answering
    pub gate: Option<(String, Notify)>,
    /// Answer with the query itself instead of `chat`
    pub echo: bool,
}

impl FakeApi {
    pub fn new(health: Result<&str, u16>, chat: Result<&str, u16>) -> Self {
        Self {
            health: Mutex::new(health.map(str::to_string)),
            chat: chat.map(str::to_string),
            health_calls: AtomicUsize::new(0),
            chat_calls: Mutex::new(Vec::new()),
            gate: None,
            echo: false,
        }
    }

    pub fn set_health(&self, health: Result<&str, u16>) {
        *self.health.lock().unwrap() = health.map(str::to_string);
    }

    pub fn chat_calls(&self) -> Vec<String> {
        self.chat_calls.lock().unwrap().clone()
    }

    pub fn health_calls(&self) -> usize {
        self.health_calls.load(Ordering::SeqCst)
    }
}

fn status_error(path: &str, status: u16) -> ApiError {
    ApiError::Status {
        url: format!("http://fake/api{}", path),
        status,
        body: String::new(),
    }
}

#[async_trait]
impl ApiService for FakeApi {
    async fn get_health(&self) -> Result<HealthResponse, ApiError> {
        self.health_calls.fetch_add(1, Ordering::SeqCst);
        let health = self.health.lock().unwrap().clone();
        match health {
            Ok(status) => Ok(HealthResponse { status }),
            Err(code) => Err(status_error("/health", code)),
        }
    }

    async fn ask_soupmate(&self, query: &str) -> Result<ChatResponse, ApiError> {
        self.chat_calls.lock().unwrap().push(query.to_string());
        if let Some((gated, notify)) = &self.gate {
            if gated == query {
                notify.notified().await;
            }
        }
        match &self.chat {
            Ok(_) if self.echo => Ok(ChatResponse::new(query.to_string())),
            Ok(answer) => Ok(ChatResponse::new(answer.clone())),
            Err(code) => Err(status_error("/chat", *code)),
        }
    }
}
