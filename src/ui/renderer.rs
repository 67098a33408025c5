//! Main UI rendering and coordination

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tokio::time::Duration;

use super::app::App;
use super::components::{
    ConversationView, InputBar, LogsOverlay, MemoryPanel, StagingBar, StatusBar, TaskLog,
};
use super::events::handle_events;
use super::layout::LayoutManager;
use crate::config::Config;
use crate::logger::SessionLog;

/// Run the main TUI application
pub async fn run_app(config: Config) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    let mouse_enabled = config.ui.mouse_enabled;
    if mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create application state
    let logger = SessionLog::new();
    logger.info(format!("Backend endpoint: {}", config.dispatch_config().url()));
    let mut app = App::new(&config, logger);

    // Main application loop
    let res = run_ui(&mut terminal, &mut app).await;

    // Cleanup
    disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        // Fold finished dispatches into the tracker before drawing
        app.drain_task_events();

        terminal.draw(|f| render_ui(f, app))?;

        // Handle events with a timeout so in-flight resolutions keep landing
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    let _handled = handle_events(Event::Key(key), app).await?;
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Render a single frame
fn render_ui(f: &mut Frame, app: &App) {
    let areas = LayoutManager::main_layout(
        f.area(),
        app.task_log_width,
        !app.staging.is_empty(),
        app.memory_panel_visible(),
    );

    TaskLog::render(f, areas.task_log, app);
    ConversationView::render(f, areas.conversation, app);

    if let Some(memory_area) = areas.memory {
        MemoryPanel::render(f, memory_area, app);
    }
    if let Some(staging_area) = areas.staging {
        StagingBar::render(f, staging_area, app);
    }

    InputBar::render(f, areas.input, app);
    StatusBar::render(f, areas.status, app);

    if app.show_logs {
        LogsOverlay::render(f, app);
    }
}
