//! UI components
//!
//! Each component is a pure projection of application state onto a frame
//! area; none of them hold state of their own.

pub mod conversation_view;
pub mod input_bar;
pub mod logs_overlay;
pub mod memory_panel;
pub mod staging_bar;
pub mod status_bar;
pub mod task_log;

pub use conversation_view::ConversationView;
pub use input_bar::InputBar;
pub use logs_overlay::LogsOverlay;
pub use memory_panel::MemoryPanel;
pub use staging_bar::StagingBar;
pub use status_bar::StatusBar;
pub use task_log::TaskLog;
