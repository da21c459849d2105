use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, error, info};

use super::Signal;
use crate::api::ApiService;
use crate::error::ApiError;
use crate::models::{ChatRequest, ChatResponse};

/// Shown in place of the answer when the chat call fails
pub const ANSWER_ERROR: &str = "Fehler beim Abrufen der Antwort";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Pending,
    Answered,
    Failed,
}

/// A submitted query waiting for its answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    id: u64,
    pub query: String,
}

/// Free-text query box forwarding to the chat endpoint.
///
/// When submissions overlap, only the answer to the most recent one is
/// shown; older answers are dropped on arrival.
pub struct SearchbarComponent {
    api: Arc<dyn ApiService>,
    query: Signal<String>,
    answer: Signal<String>,
    state: Signal<SearchState>,
    latest: AtomicU64,
}

impl SearchbarComponent {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self {
            api,
            query: Signal::default(),
            answer: Signal::default(),
            state: Signal::default(),
            latest: AtomicU64::new(0),
        }
    }

    pub fn set_query(&self, query: impl Into<String>) {
        self.query.set(query.into());
    }

    pub fn query(&self) -> String {
        self.query.get()
    }

    pub fn answer(&self) -> String {
        self.answer.get()
    }

    pub fn state(&self) -> SearchState {
        self.state.get()
    }

    /// Submits the current query and waits for the answer.
    /// Blank queries are ignored.
    pub async fn on_search(&self) {
        if let Some(ticket) = self.submit() {
            self.run(ticket).await;
        }
    }

    /// Issues a ticket for the current query, or `None` if it is blank.
    /// The query is sent as typed; trimming only decides whether it is blank.
    pub fn submit(&self) -> Option<SearchTicket> {
        let request = ChatRequest::new(self.query());
        if !request.is_valid() {
            debug!("Ignoring blank query");
            return None;
        }
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.set(SearchState::Pending);
        Some(SearchTicket {
            id,
            query: request.query,
        })
    }

    /// Performs the chat call for a ticket and applies the outcome
    pub async fn run(&self, ticket: SearchTicket) {
        let result = self.api.ask_soupmate(&ticket.query).await;
        self.resolve(&ticket, result);
    }

    /// Applies a chat outcome. Returns false if a newer submission
    /// superseded the ticket, in which case nothing changes.
    pub fn resolve(&self, ticket: &SearchTicket, result: Result<ChatResponse, ApiError>) -> bool {
        if ticket.id != self.latest.load(Ordering::SeqCst) {
            debug!("Dropping stale answer for {:?}", ticket.query);
            return false;
        }
        match result {
            Ok(res) => {
                info!("Answer from backend: {}", res.answer);
                self.answer.set(res.answer);
                self.state.set(SearchState::Answered);
            }
            Err(e) => {
                error!("Chat request failed: {}", e);
                self.answer.set(ANSWER_ERROR.to_string());
                self.state.set(SearchState::Failed);
            }
        }
        true
    }

    pub fn render(&self) -> String {
        let mut out = format!("> {}\n", self.query());
        if self.state() == SearchState::Pending {
            out.push_str("…\n");
        }
        let answer = self.answer();
        if !answer.is_empty() {
            out.push_str(&answer);
            out.push('\n');
        }
        out
    }
}
