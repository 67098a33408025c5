//! Event handling and key bindings

use std::path::Path;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, InputMode};
use crate::constants::ERROR_ATTACH_FAILED;
use crate::staging::StagedFile;

/// Handle all user input events
pub async fn handle_events(event: Event, app: &mut App) -> Result<bool, anyhow::Error> {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Press {
            // Transient notices last until the next keypress
            app.clear_messages();

            // Handle logs overlay - block all other shortcuts while it is open
            if app.show_logs {
                return Ok(handle_logs_overlay(key, app));
            }

            return match app.mode {
                InputMode::AttachPath => handle_attach_mode(key, app).await,
                InputMode::Message => Ok(handle_message_mode(key, app)),
            };
        }
    }
    Ok(false)
}

/// Handle keys while the session logs overlay is open
fn handle_logs_overlay(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.show_logs = false;
            true
        }
        KeyCode::Char('g' | 'c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if key.code == KeyCode::Char('c') {
                app.should_quit = true;
            } else {
                app.show_logs = false;
            }
            true
        }
        _ => false,
    }
}

/// Handle keys in normal message-composition mode
fn handle_message_mode(key: KeyEvent, app: &mut App) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => {
                app.should_quit = true;
                return true;
            }
            KeyCode::Char('a') => {
                app.attach_input.clear();
                app.mode = InputMode::AttachPath;
                return true;
            }
            KeyCode::Char('x') => {
                app.staging.clear();
                app.info_message = Some("Staged files cleared".to_string());
                return true;
            }
            KeyCode::Char('o') => {
                app.show_memory_panel = !app.show_memory_panel;
                return true;
            }
            KeyCode::Char('g') => {
                app.show_logs = true;
                return true;
            }
            KeyCode::Char('u') => {
                app.input.clear();
                return true;
            }
            _ => return false,
        }
    }

    match key.code {
        KeyCode::Enter => {
            app.submit_message();
            true
        }
        KeyCode::Backspace => {
            app.input.pop();
            true
        }
        KeyCode::Up => {
            app.scroll_conversation_up(1);
            true
        }
        KeyCode::Down => {
            app.scroll_conversation_down(1);
            true
        }
        KeyCode::PageUp => {
            app.scroll_conversation_up(10);
            true
        }
        KeyCode::PageDown => {
            app.scroll_conversation_down(10);
            true
        }
        KeyCode::Char(c) => {
            app.input.push(c);
            true
        }
        _ => false,
    }
}

/// Handle keys while the attach-path prompt is open
async fn handle_attach_mode(key: KeyEvent, app: &mut App) -> Result<bool, anyhow::Error> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return Ok(true);
    }

    match key.code {
        KeyCode::Esc => {
            app.attach_input.clear();
            app.mode = InputMode::Message;
            Ok(true)
        }
        KeyCode::Enter => {
            stage_attachment(app).await;
            Ok(true)
        }
        KeyCode::Backspace => {
            app.attach_input.pop();
            Ok(true)
        }
        KeyCode::Char(c) => {
            app.attach_input.push(c);
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Read the file at the prompted path and add it to the staging area.
/// The prompt stays open on failure so the path can be corrected.
async fn stage_attachment(app: &mut App) {
    let path_text = app.attach_input.trim().to_string();
    if path_text.is_empty() {
        app.mode = InputMode::Message;
        return;
    }

    match tokio::fs::read(&path_text).await {
        Ok(contents) => {
            let name = Path::new(&path_text)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path_text.clone());

            app.logger.info(format!("Staged file '{name}' ({} bytes)", contents.len()));
            app.staging.add_file(StagedFile::new(name, contents));
            app.info_message = Some(format!("📎 Staged {path_text}"));
            app.attach_input.clear();
            app.mode = InputMode::Message;
        }
        Err(e) => {
            app.error_message = Some(format!("{ERROR_ATTACH_FAILED} '{path_text}': {e}"));
        }
    }
}
