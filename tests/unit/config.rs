use covault::infrastructure::config::{load_config, load_config_from_file};
use covault::QuorumError;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("covault.toml");
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn test_load_config_when_file_present_then_sections_populated() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(
        &dir,
        r#"
[service]
gateway_url = "https://gateway.example"
data_dir = "/var/lib/covault"

[chain]
chain_id = 11155111
rpc_url = "https://rpc.example"

[relay]
enabled = true
url = "https://relay.example"
origin = "app.example"
"#,
    );

    let config = load_config_from_file(&path).expect("load");
    assert_eq!(config.service.gateway_url, "https://gateway.example");
    assert_eq!(config.chain.chain_id, 11155111);
    assert!(config.relay.enabled);
    assert_eq!(config.relay.origin.as_deref(), Some("app.example"));

    let provider = config.chain.provider();
    assert_eq!(provider.chain_id, 11155111);
    assert_eq!(provider.rpc_url, "https://rpc.example");
}

#[test]
fn test_load_config_when_file_missing_then_defaults_fail_validation() {
    let dir = TempDir::new().expect("temp dir");
    let err = load_config(dir.path()).expect_err("defaults have no chain id");
    assert!(matches!(err, QuorumError::ConfigError(_)));
    assert!(err.to_string().contains("chain_id"));
}

#[test]
fn test_load_config_when_relay_enabled_without_url_then_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(
        &dir,
        r#"
[chain]
chain_id = 1

[relay]
enabled = true
"#,
    );

    let err = load_config_from_file(&path).expect_err("relay without url");
    assert!(err.to_string().contains("relay.url"));
}
