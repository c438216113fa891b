use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tokio::time::{Duration, Instant};

use crate::clipboard::ClipboardManager;
use crate::config::AppConfig;
use crate::events::{EventHandler, EventResult};
use crate::theme::Theme;
use crate::ui::ContactFormUI;

pub struct App {
    should_quit: bool,
    ui: ContactFormUI,
    event_handler: EventHandler,
    clipboard: ClipboardManager,
    theme: Theme,
    tick_rate: Duration,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            should_quit: false,
            ui: ContactFormUI::new(),
            event_handler: EventHandler::new(),
            clipboard: ClipboardManager::new(),
            theme: config.theme(),
            tick_rate: Duration::from_millis(config.tick_rate_ms),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn ui(&self) -> &ContactFormUI {
        &self.ui
    }

    pub async fn run(&mut self) -> Result<()> {
        if !io::stdout().is_tty() {
            return Err(anyhow::anyhow!(
                "contact-form requires a terminal (TTY). Use the `check` subcommand for scripted input."
            ));
        }

        // Setup terminal
        enable_raw_mode()
            .map_err(|e| anyhow::anyhow!("Failed to enable raw mode: {}", e))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| anyhow::anyhow!("Failed to setup terminal: {}", e))?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal =
            Terminal::new(backend).map_err(|e| anyhow::anyhow!("Failed to create terminal: {}", e))?;

        tracing::info!("Contact form started with theme '{}'", self.theme.name);
        let result = self.run_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|f| {
                let area = f.size();
                self.ui.render(f, area, &self.theme);
            })?;

            let timeout = self
                .tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    let result = self.event_handler.handle_key_event(key, &mut self.ui);
                    self.handle_event_result(result);

                    if self.event_handler.should_quit() {
                        self.should_quit = true;
                    }
                }
            }

            if last_tick.elapsed() >= self.tick_rate {
                last_tick = Instant::now();
                tokio::task::yield_now().await;
            }

            if self.should_quit {
                break;
            }
        }

        tracing::info!(
            "Contact form closed after {} submit attempt(s)",
            self.ui.form().submit_count()
        );
        Ok(())
    }

    fn handle_event_result(&mut self, result: EventResult) {
        match result {
            EventResult::Continue => {}
            EventResult::Submitted => {
                tracing::debug!("Submitted values now on display");
            }
            EventResult::Rejected(count) => {
                tracing::debug!("Submit rejected, {} error(s) shown", count);
            }
            EventResult::Paste => match self.clipboard.paste() {
                Ok(text) => self.ui.paste(&text),
                Err(e) => tracing::warn!("Paste failed: {}", e),
            },
        }
    }
}
