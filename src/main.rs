use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing::Level;

use contact_form::app::App;
use contact_form::cli::{Cli, CliHandler};
use contact_form::config::AppConfig;
use contact_form::theme::Theme;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => AppConfig::config_file_path()?,
    };
    let config = AppConfig::load_from(&config_path)?;

    init_logging(&cli, &config)?;

    if let Some(command) = cli.command {
        let handler = CliHandler::new(config, config_path);
        let accepted = handler.handle_command(command, &mut std::io::stdout().lock())?;
        return Ok(if accepted {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let mut app = App::new(&config);
    if let Some(name) = &cli.theme {
        let theme = Theme::by_name(name)
            .with_context(|| format!("Theme '{}' not found", name))?;
        app = app.with_theme(theme);
    }

    app.run().await?;
    Ok(ExitCode::SUCCESS)
}

/// Install the tracing subscriber
///
/// The terminal UI owns stdout, so interactive sessions only log to a file.
fn init_logging(cli: &Cli, config: &AppConfig) -> Result<()> {
    let level = if cli.debug { Level::DEBUG } else { Level::INFO };

    let log_file = config
        .log_file
        .clone()
        .or_else(|| cli.debug.then(AppConfig::default_log_file).flatten());

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if cli.command.is_some() => {
            tracing_subscriber::fmt()
                .with_max_level(Level::WARN)
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }

    Ok(())
}
