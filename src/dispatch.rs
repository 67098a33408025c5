//! Task submission and dispatch to the agent backend
//!
//! One dispatcher serves any backend variant: the endpoint path and multipart
//! field names are configuration, not code. Each submission is registered
//! with the lifecycle tracker, posted as a single multipart request on a
//! background task, and resolved through exactly one [`TaskEvent`] on the
//! dispatcher's channel.

use tokio::sync::mpsc;

use crate::constants::{
    DEFAULT_BACKEND_URL, DEFAULT_ENDPOINT_PATH, DEFAULT_FILE_FIELD, DEFAULT_MESSAGE_FIELD,
    GENERIC_DISPATCH_FAILURE,
};
use crate::logger::SessionLog;
use crate::protocol::{BackendReply, ResponsePayload, TaskOutcome};
use crate::staging::StagedFile;
use crate::tracker::{TaskId, TaskLifecycleTracker, TaskStatus, TrackerError};

/// Where and how submissions are posted.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Backend origin, e.g. `http://localhost:8000`
    pub base_url: String,
    /// Path of the message endpoint, e.g. `/chat` or `/send_message`
    pub endpoint_path: String,
    /// Name of the text form field
    pub message_field: String,
    /// Name shared by all file form fields (the backend accepts repeats)
    pub file_field: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_string(),
            message_field: DEFAULT_MESSAGE_FIELD.to_string(),
            file_field: DEFAULT_FILE_FIELD.to_string(),
        }
    }
}

impl DispatchConfig {
    /// Default field names and endpoint against the given backend origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Full URL of the message endpoint.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.endpoint_path)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Rejected before any task exists: nothing to send.
    #[error("nothing to send: message and file list are both empty")]
    EmptySubmission,
    #[error(transparent)]
    Tracker(#[from] TrackerError),
}

/// Notification from a background dispatch task.
#[derive(Debug)]
pub enum TaskEvent {
    Resolved { id: TaskId, outcome: TaskOutcome },
}

/// Dispatches submissions to the agent backend.
pub struct TaskDispatcher {
    client: reqwest::Client,
    config: DispatchConfig,
    events_tx: mpsc::UnboundedSender<TaskEvent>,
    logger: SessionLog,
}

impl TaskDispatcher {
    /// Create a dispatcher and the receiving end of its event channel. The
    /// caller drains the receiver from the control thread that owns the
    /// tracker and conversation state.
    pub fn new(config: DispatchConfig, logger: SessionLog) -> (Self, mpsc::UnboundedReceiver<TaskEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                client: reqwest::Client::new(),
                config,
                events_tx: tx,
                logger,
            },
            rx,
        )
    }

    #[must_use]
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Submit one task: text plus the files handed over by the staging area.
    ///
    /// Fails fast with [`SubmitError::EmptySubmission`] when the trimmed
    /// description and the file list are both empty; no task is created and
    /// no request goes out. Otherwise the task is registered `Pending`,
    /// moved to `InProgress` before this function returns, and the HTTP send
    /// runs on a spawned tokio task. Exactly one [`TaskEvent::Resolved`] is
    /// delivered per returned id.
    pub fn submit(
        &self,
        tracker: &mut TaskLifecycleTracker,
        description: &str,
        files: Vec<StagedFile>,
    ) -> Result<TaskId, SubmitError> {
        if description.trim().is_empty() && files.is_empty() {
            return Err(SubmitError::EmptySubmission);
        }

        let id = TaskId::new();
        tracker.register(id, description)?;
        tracker.transition(id, TaskStatus::InProgress);

        self.logger
            .task_info(id, format!("dispatching ({} file(s))", files.len()));

        let client = self.client.clone();
        let url = self.config.url();
        let message_field = self.config.message_field.clone();
        let file_field = self.config.file_field.clone();
        let description = description.to_string();
        let events_tx = self.events_tx.clone();
        let logger = self.logger.clone();

        tokio::spawn(async move {
            let outcome =
                send_request(&client, &url, message_field, file_field, description, files, id, &logger).await;
            // The receiver only disappears when the session is shutting down
            let _ = events_tx.send(TaskEvent::Resolved { id, outcome });
        });

        Ok(id)
    }
}

/// Perform the multipart POST and map the reply onto a [`TaskOutcome`].
///
/// Transport-class failures (network error, non-2xx status, unparsable body,
/// a body with neither `response` nor `error`) become the generic failure
/// message; the underlying cause goes to the operational log only. An
/// explicit `error` field is surfaced verbatim.
#[allow(clippy::too_many_arguments)]
async fn send_request(
    client: &reqwest::Client,
    url: &str,
    message_field: String,
    file_field: String,
    description: String,
    files: Vec<StagedFile>,
    id: TaskId,
    logger: &SessionLog,
) -> TaskOutcome {
    let mut form = reqwest::multipart::Form::new().text(message_field, description);
    for file in files {
        let part = reqwest::multipart::Part::bytes(file.contents).file_name(file.name);
        form = form.part(file_field.clone(), part);
    }

    let response = match client.post(url).multipart(form).send().await {
        Ok(response) => response,
        Err(e) => {
            log::error!("task {id}: request to {url} failed: {e}");
            logger.task_error(id, "network error");
            return TaskOutcome::Failed(GENERIC_DISPATCH_FAILURE.to_string());
        }
    };

    let status = response.status();
    if !status.is_success() {
        log::error!("task {id}: backend returned HTTP {status}");
        logger.task_error(id, format!("HTTP {status}"));
        return TaskOutcome::Failed(GENERIC_DISPATCH_FAILURE.to_string());
    }

    let reply = match response.json::<BackendReply>().await {
        Ok(reply) => reply,
        Err(e) => {
            log::error!("task {id}: malformed reply body: {e}");
            logger.task_error(id, "malformed reply");
            return TaskOutcome::Failed(GENERIC_DISPATCH_FAILURE.to_string());
        }
    };

    if let Some(error) = reply.error {
        log::warn!("task {id}: backend reported error: {error}");
        logger.task_error(id, "backend reported an error");
        return TaskOutcome::Failed(error);
    }

    match reply.response {
        Some(response) => {
            logger.task_info(id, "completed");
            TaskOutcome::Completed(ResponsePayload {
                response,
                memory: reply.memory,
                file_link: reply.file_link,
            })
        }
        None => {
            log::error!("task {id}: reply had neither 'response' nor 'error'");
            logger.task_error(id, "reply had neither field");
            TaskOutcome::Failed(GENERIC_DISPATCH_FAILURE.to_string())
        }
    }
}
