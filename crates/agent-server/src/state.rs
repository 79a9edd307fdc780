//! Application State

use std::sync::Arc;

use simple_agent::SimpleAgent;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Keyword dispatcher; immutable, shared by every request
    pub agent: Arc<SimpleAgent>,
}

impl AppState {
    pub fn new(agent: SimpleAgent) -> Self {
        Self { agent: Arc::new(agent) }
    }
}
