//! Agentchat - a terminal chat client for conversational agent backends
//!
//! This library provides a terminal front end for submitting text tasks with
//! optional file attachments to a remote agent backend, and for following
//! each submission's lifecycle through to the backend's response. It includes
//! file staging, multipart dispatch over HTTP, per-task lifecycle tracking,
//! and a rich interactive UI built with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`dispatch`] - Task submission and HTTP dispatch to the backend
//! * [`staging`] - In-memory staging of files pending submission
//! * [`tracker`] - Per-task lifecycle state machine and log
//! * [`conversation`] - Response/error blocks and the memory snapshot
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Conversation state: response blocks and the agent memory snapshot
pub mod conversation;

/// Task submission and dispatch to the agent backend
pub mod dispatch;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Agent backend protocol data structures
pub mod protocol;

/// In-memory staging of files attached to the next submission
pub mod staging;

/// Task lifecycle tracking
pub mod tracker;

/// Terminal user interface components and rendering
pub mod ui;

// Re-export the core types for convenient access
pub use protocol::{ResponsePayload, TaskOutcome};
pub use staging::{FileStagingArea, StagedFile};
pub use tracker::{TaskId, TaskLifecycleTracker, TaskStatus};
