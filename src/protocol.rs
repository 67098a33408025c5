//! Agent backend protocol data structures
//!
//! Serde views of the JSON bodies exchanged with the agent backend, plus the
//! task outcome type the rest of the application consumes.

use serde::Deserialize;
use serde_json::Value;

/// Raw JSON body returned by the backend.
///
/// Success and failure share one endpoint: a successful reply carries
/// `response` (with optional `memory` and `file_link`), an application-level
/// failure carries `error`. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendReply {
    pub response: Option<String>,
    pub error: Option<String>,
    pub memory: Option<Value>,
    pub file_link: Option<String>,
}

/// Successful backend result associated with exactly one task.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponsePayload {
    /// The agent's textual answer
    pub response: String,
    /// Snapshot of the agent's memory state, arbitrary nested JSON
    pub memory: Option<Value>,
    /// Download link for a produced artifact, when the agent created one
    pub file_link: Option<String>,
}

/// Terminal result of one dispatched task.
#[derive(Debug, Clone)]
pub enum TaskOutcome {
    Completed(ResponsePayload),
    Failed(String),
}

impl TaskOutcome {
    /// Returns the user-facing failure message, if this is a failure.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            TaskOutcome::Completed(_) => None,
            TaskOutcome::Failed(message) => Some(message),
        }
    }
}
