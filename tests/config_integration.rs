use faq_chat::config::{AppConfig, Cli, Command};
use clap::Parser;
use serial_test::serial;
use std::env;
use std::fs;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("FAQ_CHAT_SERVER__PORT");
        env::remove_var("FAQ_CHAT_FAQ__THRESHOLD");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("BIND_HOST");
        env::remove_var("FAQ_PATH");
        env::remove_var("FAQ_THRESHOLD");
    }
}

fn load(args: &[&str]) -> AppConfig {
    let mut argv = vec!["faq-chat"];
    argv.extend_from_slice(args);
    AppConfig::load_from_args(argv).expect("Failed to load config")
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = load(&[]);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.faq.path, "faq_questions.json");
    assert!((config.faq.threshold - 0.2).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("FAQ_CHAT_SERVER__PORT", "9090");
        env::set_var("FAQ_CHAT_FAQ__THRESHOLD", "0.35");
    }

    let config = load(&[]);
    assert_eq!(config.server.port, 9090);
    assert!((config.faq.threshold - 0.35).abs() < f64::EPSILON);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("FAQ_CHAT_SERVER__PORT", "9090");
    }

    let config = load(&["--port", "7000", "--faq-path", "corpus.yaml"]);
    assert_eq!(config.server.port, 7000);
    assert_eq!(config.faq.path, "corpus.yaml");

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = dir.path().join("faq-chat.yaml");
    let config_content = r"
server:
  port: 7070
faq:
  path: /srv/faq.yaml
    ";
    fs::write(&file_path, config_content).expect("Failed to write temp config");

    unsafe {
        env::set_var("CONFIG_FILE", &file_path);
    }

    let config = load(&[]);
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.faq.path, "/srv/faq.yaml");
    // Keys absent from the file keep their defaults.
    assert_eq!(config.server.host, "127.0.0.1");

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args(["faq-chat", "--config", "/nonexistent/faq-chat.yaml"]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_chat_subcommand() {
    clear_env_vars();

    let cli = Cli::try_parse_from(["faq-chat", "chat", "--url", "http://example.test:8080"])
        .expect("Failed to parse CLI");
    assert_eq!(
        cli.command,
        Some(Command::Chat {
            url: "http://example.test:8080".to_string()
        })
    );

    let cli = Cli::try_parse_from(["faq-chat"]).expect("Failed to parse CLI");
    assert_eq!(cli.command, None);
}
