//! Conversation state: response and error blocks plus the memory snapshot
//!
//! Pure state with rendering as a projection on top (see
//! `ui::components::conversation_view`), so the response-rendering contract
//! can be tested without a terminal.

use std::collections::HashMap;

use serde_json::Value;

use crate::protocol::TaskOutcome;
use crate::tracker::TaskId;

/// Body of one rendered block.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockBody {
    Response {
        text: String,
        file_link: Option<String>,
    },
    Error(String),
}

/// One block in the conversation, keyed by the task that produced it.
#[derive(Debug, Clone)]
pub struct Block {
    pub id: TaskId,
    pub body: BlockBody,
}

/// Append-only conversation log with one block per task id.
///
/// A second `show_response`/`show_error` for the same id replaces that
/// block's body in place; the block keeps its original position.
#[derive(Debug, Default)]
pub struct ConversationLog {
    blocks: Vec<Block>,
    index: HashMap<TaskId, usize>,
    memory: Option<Value>,
}

impl ConversationLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the backend's textual response for `id`.
    pub fn show_response(&mut self, id: TaskId, text: impl Into<String>, file_link: Option<String>) {
        self.upsert(
            id,
            BlockBody::Response {
                text: text.into(),
                file_link,
            },
        );
    }

    /// Show a failure for `id`, visually distinguished from a response.
    pub fn show_error(&mut self, id: TaskId, message: impl Into<String>) {
        self.upsert(id, BlockBody::Error(message.into()));
    }

    /// Replace the current memory snapshot. Absent snapshots are a no-op so
    /// a reply without memory keeps the previous one visible.
    pub fn show_memory(&mut self, snapshot: Option<Value>) {
        if let Some(snapshot) = snapshot {
            self.memory = Some(snapshot);
        }
    }

    /// Route a dispatch outcome into the matching block (and memory update).
    pub fn apply(&mut self, id: TaskId, outcome: &TaskOutcome) {
        match outcome {
            TaskOutcome::Completed(payload) => {
                self.show_response(id, payload.response.clone(), payload.file_link.clone());
                self.show_memory(payload.memory.clone());
            }
            TaskOutcome::Failed(message) => self.show_error(id, message.clone()),
        }
    }

    /// Blocks in first-render order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Block> {
        self.index.get(&id).and_then(|&i| self.blocks.get(i))
    }

    /// Latest memory snapshot, if the backend ever sent one.
    #[must_use]
    pub fn memory(&self) -> Option<&Value> {
        self.memory.as_ref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    fn upsert(&mut self, id: TaskId, body: BlockBody) {
        match self.index.get(&id) {
            Some(&i) => self.blocks[i].body = body,
            None => {
                self.index.insert(id, self.blocks.len());
                self.blocks.push(Block { id, body });
            }
        }
    }
}
