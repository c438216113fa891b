use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::form::{ContactForm, FormField, SubmitOutcome};
use crate::theme::Theme;

/// Contact form - a terminal contact form with inline validation
#[derive(Parser, Debug)]
#[command(name = "contact-form")]
#[command(about = "A terminal contact form with inline validation")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured theme
    #[arg(long, global = true)]
    pub theme: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate and submit form values without opening the terminal UI
    Check(CheckArgs),

    /// List available themes
    Themes,

    /// Show or initialize the configuration file
    Config(ConfigArgs),
}

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    #[arg(long, default_value = "")]
    pub first_name: String,

    #[arg(long, default_value = "")]
    pub last_name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub message: String,

    /// Print the submitted values as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write a default configuration file if none exists
    #[arg(long)]
    pub init: bool,
}

/// Command-line interface handler
pub struct CliHandler {
    config: AppConfig,
    config_path: PathBuf,
}

impl CliHandler {
    pub fn new(config: AppConfig, config_path: PathBuf) -> Self {
        Self {
            config,
            config_path,
        }
    }

    /// Handle CLI commands; `Ok(false)` means the form was rejected
    pub fn handle_command(&self, command: Commands, out: &mut impl Write) -> Result<bool> {
        match command {
            Commands::Check(args) => self.handle_check(args, out),
            Commands::Themes => self.handle_themes(out).map(|_| true),
            Commands::Config(args) => self.handle_config(args, out).map(|_| true),
        }
    }

    /// Run one submit with the given values
    pub fn handle_check(&self, args: CheckArgs, out: &mut impl Write) -> Result<bool> {
        let mut form = ContactForm::new();
        form.set_field(FormField::FirstName, args.first_name);
        form.set_field(FormField::LastName, args.last_name);
        form.set_field(FormField::Email, args.email);
        form.set_field(FormField::Message, args.message);

        match form.submit() {
            SubmitOutcome::Accepted(snapshot) => {
                if args.json {
                    let json = serde_json::to_string_pretty(&snapshot)
                        .context("Failed to serialize submitted values")?;
                    writeln!(out, "{}", json)?;
                } else {
                    writeln!(out, "First Name: {}", snapshot.first_name())?;
                    writeln!(out, "Last Name: {}", snapshot.last_name())?;
                    writeln!(out, "Email: {}", snapshot.email())?;
                    if let Some(message) = snapshot.message() {
                        writeln!(out, "Message: {}", message)?;
                    }
                }
                Ok(true)
            }
            SubmitOutcome::Rejected { .. } => {
                for message in form.errors().messages() {
                    writeln!(out, "{}", message)?;
                }
                Ok(false)
            }
        }
    }

    fn handle_themes(&self, out: &mut impl Write) -> Result<()> {
        for theme in Theme::available() {
            let marker = if theme.name == self.config.theme().name { "*" } else { " " };
            writeln!(out, "{} {} - {}", marker, theme.name, theme.description)?;
        }
        Ok(())
    }

    fn handle_config(&self, args: ConfigArgs, out: &mut impl Write) -> Result<()> {
        if args.init {
            if self.config_path.exists() {
                writeln!(out, "Config already exists at {}", self.config_path.display())?;
            } else {
                AppConfig::default()
                    .save_to(&self.config_path)
                    .context("Failed to write default config")?;
                writeln!(out, "Wrote default config to {}", self.config_path.display())?;
            }
            return Ok(());
        }

        writeln!(out, "Config file: {}", self.config_path.display())?;
        writeln!(out, "{}", toml::to_string_pretty(&self.config)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> CliHandler {
        CliHandler::new(AppConfig::default(), PathBuf::from("unused.toml"))
    }

    #[test]
    fn test_check_prints_errors_for_blank_form() {
        let mut out = Vec::new();
        let accepted = handler().handle_check(CheckArgs::default(), &mut out).unwrap();

        assert!(!accepted);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("email is a required field"));
    }

    #[test]
    fn test_check_prints_json_snapshot() {
        let args = CheckArgs {
            first_name: "peter".to_string(),
            last_name: "arguelles".to_string(),
            email: "testing@mdail.com".to_string(),
            message: "hello".to_string(),
            json: true,
        };
        let mut out = Vec::new();
        assert!(handler().handle_check(args, &mut out).unwrap());

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["lastName"], "arguelles");
        assert_eq!(json["message"], "hello");
    }

    #[test]
    fn test_themes_marks_current() {
        let mut out = Vec::new();
        handler().handle_command(Commands::Themes, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("* Gruvbox Dark"));
        assert!(text.contains("  High Contrast"));
    }
}
