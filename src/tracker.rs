//! Task lifecycle tracking
//!
//! Every submission is registered here under a fresh [`TaskId`] and walks the
//! forward-only state machine Pending → InProgress → (Completed | Error).
//! The log is append-only for the whole session: tasks are never removed and
//! stay in submission order regardless of when they resolve.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::protocol::TaskOutcome;

/// Opaque identifier for one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Short prefix for display next to log entries and response blocks.
    #[must_use]
    pub fn short(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Status of a tracked task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Error,
}

impl TaskStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Error)
    }

    /// Legal transitions: Pending→InProgress, InProgress→Completed,
    /// InProgress→Error. Nothing leaves a terminal state.
    #[must_use]
    pub fn can_transition_to(self, next: TaskStatus) -> bool {
        matches!(
            (self, next),
            (TaskStatus::Pending, TaskStatus::InProgress)
                | (TaskStatus::InProgress, TaskStatus::Completed)
                | (TaskStatus::InProgress, TaskStatus::Error)
        )
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Error => "error",
        }
    }
}

/// One tracked submission.
#[derive(Debug, Clone)]
pub struct TaskRecord {
    pub id: TaskId,
    /// The user's text, possibly empty when only files were sent
    pub description: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("task {0} is already registered")]
    DuplicateId(TaskId),
}

/// Append-only registry of tasks and their lifecycle state.
#[derive(Debug, Default)]
pub struct TaskLifecycleTracker {
    tasks: Vec<TaskRecord>,
    index: HashMap<TaskId, usize>,
}

impl TaskLifecycleTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entry in `Pending`. A duplicate id is a precondition
    /// violation and leaves the tracker untouched.
    pub fn register(&mut self, id: TaskId, description: impl Into<String>) -> Result<(), TrackerError> {
        if self.index.contains_key(&id) {
            return Err(TrackerError::DuplicateId(id));
        }

        self.index.insert(id, self.tasks.len());
        self.tasks.push(TaskRecord {
            id,
            description: description.into(),
            status: TaskStatus::Pending,
            created_at: Utc::now(),
        });
        Ok(())
    }

    /// Apply a transition if it is legal. Unknown ids and illegal transitions
    /// are warned no-ops; the rendering surface must never crash over them.
    pub fn transition(&mut self, id: TaskId, next: TaskStatus) -> bool {
        let Some(record) = self.index.get(&id).and_then(|&i| self.tasks.get_mut(i)) else {
            log::warn!("transition for unknown task {id} to {next:?} ignored");
            return false;
        };

        if !record.status.can_transition_to(next) {
            log::warn!(
                "illegal transition for task {id}: {:?} -> {next:?} ignored",
                record.status
            );
            return false;
        }

        record.status = next;
        true
    }

    /// Map a dispatch outcome onto the terminal transition for `id`.
    pub fn resolve(&mut self, id: TaskId, outcome: &TaskOutcome) -> bool {
        let terminal = match outcome {
            TaskOutcome::Completed(_) => TaskStatus::Completed,
            TaskOutcome::Failed(_) => TaskStatus::Error,
        };
        self.transition(id, terminal)
    }

    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&TaskRecord> {
        self.index.get(&id).and_then(|&i| self.tasks.get(i))
    }

    /// All tasks, oldest first.
    #[must_use]
    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    /// Number of tasks that have not reached a terminal state yet.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.tasks.iter().filter(|t| !t.status.is_terminal()).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
