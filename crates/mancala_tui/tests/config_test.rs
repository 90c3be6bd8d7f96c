//! Configuration layering tests.

use mancala_tui::{ClientConfig, LOG_FILE_ENV, SERVER_URL_ENV};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = ClientConfig::default();
    assert_eq!(config.server_url(), "http://localhost:8080/mancala/api/v1");
    assert_eq!(config.log_file(), Path::new("mancala_tui.log"));
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ClientConfig::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn test_file_values_and_partial_defaults() {
    let file = write_config(
        r#"
server_url = "http://games.example:9000/mancala/api/v1/"
log_filter = "mancala_tui=debug"
"#,
    );
    let config = ClientConfig::load(file.path()).unwrap();
    assert_eq!(config.server_url(), "http://games.example:9000/mancala/api/v1");
    assert_eq!(config.log_filter(), "mancala_tui=debug");
    assert_eq!(config.log_file(), Path::new("mancala_tui.log"));
}

#[test]
fn test_invalid_toml_is_error() {
    let file = write_config("server_url = [not toml");
    let err = ClientConfig::load(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_env_overrides_file() {
    let config = ClientConfig::default().with_env_lookup(|key| match key {
        SERVER_URL_ENV => Some("http://env-host/api/".to_string()),
        LOG_FILE_ENV => Some("/tmp/mancala-env.log".to_string()),
        _ => None,
    });
    assert_eq!(config.server_url(), "http://env-host/api");
    assert_eq!(config.log_file(), Path::new("/tmp/mancala-env.log"));
}

#[test]
fn test_blank_env_ignored() {
    let config = ClientConfig::default().with_env_lookup(|_| Some("  ".to_string()));
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn test_cli_overrides_env() {
    let config = ClientConfig::default()
        .with_env_lookup(|key| (key == SERVER_URL_ENV).then(|| "http://env-host".to_string()))
        .with_overrides(
            Some(" http://cli-host:8080/mancala/api/v1/ ".to_string()),
            Some(PathBuf::from("cli.log")),
        );
    assert_eq!(config.server_url(), "http://cli-host:8080/mancala/api/v1");
    assert_eq!(config.log_file(), Path::new("cli.log"));
}

#[test]
fn test_no_overrides_keeps_values() {
    let config = ClientConfig::default().with_overrides(None, None);
    assert_eq!(config, ClientConfig::default());
}
