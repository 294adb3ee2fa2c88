//! Loading `deployer.toml` from disk.

use std::fs;
use std::path::PathBuf;

use token_deployer::config::schema::LogFormat;
use token_deployer::config::{load_or_default, ConfigError, ConfigSource};

fn write_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "token-deployer-it-{}-{}.toml",
        name,
        std::process::id()
    ));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_full_config_file() {
    let path = write_config(
        "full",
        r#"
        [compiler]
        solidity_version = "0.8.19"

        [artifact]
        path = "out/WantaekToken.json"

        [rpc]
        timeout_secs = 20
        confirmations = 2
        local_url = "http://localhost:8545"

        [observability]
        log_level = "debug"
        log_format = "json"
        "#,
    );

    let result = load_or_default(&path);
    fs::remove_file(&path).ok();
    let (config, source) = result.unwrap();

    assert_eq!(source, ConfigSource::File);
    assert_eq!(config.artifact.path, "out/WantaekToken.json");
    assert_eq!(config.rpc.timeout_secs, 20);
    assert_eq!(config.rpc.confirmations, 2);
    assert_eq!(config.observability.log_format, LogFormat::Json);
}

#[test]
fn test_every_validation_error_is_reported() {
    let path = write_config(
        "broken",
        r#"
        [compiler]
        solidity_version = "latest"

        [artifact]
        path = ""

        [observability]
        log_level = "chatty"
        "#,
    );

    let result = load_or_default(&path);
    fs::remove_file(&path).ok();

    match result {
        Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 3),
        other => panic!("expected validation errors, got {:?}", other),
    }
}

#[test]
fn test_unknown_log_format_is_parse_error() {
    let path = write_config("format", "[observability]\nlog_format = \"xml\"\n");
    let result = load_or_default(&path);
    fs::remove_file(&path).ok();
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}
