use contact_form::cli::{Cli, Commands};
use contact_form::config::{AppConfig, ConfigError};
use clap::Parser;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_missing_config_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_config_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = AppConfig {
        theme: "High Contrast".to_string(),
        tick_rate_ms: 100,
        log_file: Some(PathBuf::from("/tmp/contact-form.log")),
    };
    config.save_to(&path).unwrap();

    let loaded = AppConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.theme().name, "High Contrast");
}

#[test]
fn test_malformed_config_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "tick_rate_ms = \"fast\"").unwrap();

    assert!(matches!(
        AppConfig::load_from(&path),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn test_invalid_config_values_are_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "tick_rate_ms = 0").unwrap();

    assert!(matches!(
        AppConfig::load_from(&path),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_cli_parses_check_command() {
    let cli = Cli::try_parse_from([
        "contact-form",
        "--debug",
        "check",
        "--first-name",
        "peter",
        "--email",
        "testing@mdail.com",
        "--json",
    ])
    .unwrap();

    assert!(cli.debug);
    match cli.command {
        Some(Commands::Check(args)) => {
            assert_eq!(args.first_name, "peter");
            assert_eq!(args.last_name, "");
            assert!(args.json);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_cli_without_subcommand_opens_form() {
    let cli = Cli::try_parse_from(["contact-form", "--theme", "gruvbox light"]).unwrap();
    assert!(cli.command.is_none());
    assert_eq!(cli.theme.as_deref(), Some("gruvbox light"));
}
