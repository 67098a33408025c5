//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Backend defaults
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_ENDPOINT_PATH: &str = "/chat";
pub const DEFAULT_MESSAGE_FIELD: &str = "message";
pub const DEFAULT_FILE_FIELD: &str = "files";

/// Environment variable that overrides `[backend] base_url` from the config file
pub const BACKEND_URL_ENV: &str = "AGENTCHAT_BACKEND_URL";

// User-facing messages
pub const GENERIC_DISPATCH_FAILURE: &str =
    "The agent backend could not be reached or returned an unexpected reply. Please try again.";
pub const ERROR_EMPTY_SUBMISSION: &str = "❌ Nothing to send: type a message or attach a file first";
pub const ERROR_ATTACH_FAILED: &str = "❌ Could not read file";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const OVERLAY_TITLE_SESSION_LOGS: &str = "🔍 Session Logs - Press 'Esc' or Ctrl+G to close";

// UI Layout Constants
/// Minimum task log width in columns
pub const TASK_LOG_MIN_WIDTH: u16 = 15;
/// Maximum task log width in columns
pub const TASK_LOG_MAX_WIDTH: u16 = 60;
/// Default task log width in columns
pub const TASK_LOG_DEFAULT_WIDTH: u16 = 34;
/// Height of the memory snapshot panel in rows
pub const MEMORY_PANEL_HEIGHT: u16 = 12;
/// Height of the bordered input bar in rows
pub const INPUT_BAR_HEIGHT: u16 = 3;
