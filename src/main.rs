use anyhow::Result;

use agentchat::config::Config;
use agentchat::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: invalid configuration");
            eprintln!("{e:#}");
            eprintln!("\n💡 Fix the file or delete it to fall back to defaults.");
            return Ok(());
        }
    };

    setup_file_logging(&config)?;

    // Run the TUI application
    ui::run_app(config).await?;

    Ok(())
}

/// Initialize the operational log file when `[logging] enabled = true`.
/// Transport failures and illegal transitions are diagnosed here; the UI
/// only ever shows the generic failure message.
fn setup_file_logging(config: &Config) -> Result<()> {
    if !config.logging.enabled {
        return Ok(());
    }

    let log_dir = dirs::cache_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))?
        .join("agentchat");
    std::fs::create_dir_all(&log_dir)?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] [{}] [{}] {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(fern::log_file(log_dir.join("agentchat.log"))?)
        .apply()?;

    Ok(())
}
