//! Application state and business logic

use tokio::sync::mpsc;

use crate::config::Config;
use crate::constants::ERROR_EMPTY_SUBMISSION;
use crate::conversation::ConversationLog;
use crate::dispatch::{TaskDispatcher, TaskEvent};
use crate::logger::SessionLog;
use crate::protocol::TaskOutcome;
use crate::staging::FileStagingArea;
use crate::tracker::TaskLifecycleTracker;

/// What the input bar currently captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Free text for the next submission
    #[default]
    Message,
    /// A local path to stage as an attachment
    AttachPath,
}

/// Application state
pub struct App {
    pub should_quit: bool,

    // Submission state
    pub input: String,
    pub attach_input: String,
    pub mode: InputMode,
    pub staging: FileStagingArea,

    // Task and conversation state, owned by the control thread
    pub tracker: TaskLifecycleTracker,
    pub conversation: ConversationLog,

    // Services
    pub dispatcher: TaskDispatcher,
    task_events_rx: mpsc::UnboundedReceiver<TaskEvent>,
    pub logger: SessionLog,

    // Transient UI state
    pub error_message: Option<String>,
    pub info_message: Option<String>,
    pub show_memory_panel: bool,
    pub show_logs: bool,
    pub conversation_scroll: u16,
    pub task_log_width: u16,
}

impl App {
    /// Create a new App instance
    #[must_use]
    pub fn new(config: &Config, logger: SessionLog) -> Self {
        let (dispatcher, task_events_rx) = TaskDispatcher::new(config.dispatch_config(), logger.clone());

        Self {
            should_quit: false,
            input: String::new(),
            attach_input: String::new(),
            mode: InputMode::Message,
            staging: FileStagingArea::new(),
            tracker: TaskLifecycleTracker::new(),
            conversation: ConversationLog::new(),
            dispatcher,
            task_events_rx,
            logger,
            error_message: None,
            info_message: None,
            show_memory_panel: config.ui.show_memory_panel,
            show_logs: false,
            conversation_scroll: 0,
            task_log_width: config.ui.task_log_width,
        }
    }

    /// Submit the current input together with the staged files.
    ///
    /// The staging area is consumed as soon as the request is constructed,
    /// before the outcome is known; a later failure does not restore it.
    pub fn submit_message(&mut self) {
        if self.input.trim().is_empty() && self.staging.is_empty() {
            self.error_message = Some(ERROR_EMPTY_SUBMISSION.to_string());
            return;
        }

        let description = self.input.clone();
        let files = self.staging.take();

        match self.dispatcher.submit(&mut self.tracker, &description, files) {
            Ok(_id) => {
                self.input.clear();
            }
            Err(e) => {
                self.error_message = Some(format!("❌ {e}"));
            }
        }
    }

    /// Drain resolutions from finished dispatch tasks and fold them into the
    /// tracker and conversation. Runs on every loop tick; each event carries
    /// its task id, so out-of-order completions land on the right entries.
    pub fn drain_task_events(&mut self) {
        while let Ok(TaskEvent::Resolved { id, outcome }) = self.task_events_rx.try_recv() {
            self.tracker.resolve(id, &outcome);
            self.conversation.apply(id, &outcome);

            if let TaskOutcome::Failed(message) = &outcome {
                self.error_message = Some(format!("❌ Task {} failed: {message}", id.short()));
            }
        }
    }

    pub fn scroll_conversation_up(&mut self, lines: u16) {
        self.conversation_scroll = self.conversation_scroll.saturating_sub(lines);
    }

    pub fn scroll_conversation_down(&mut self, lines: u16) {
        self.conversation_scroll = self.conversation_scroll.saturating_add(lines);
    }

    /// Clear any transient messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.info_message = None;
    }

    /// Whether the memory panel should currently be drawn.
    #[must_use]
    pub fn memory_panel_visible(&self) -> bool {
        self.show_memory_panel && self.conversation.memory().is_some()
    }
}
