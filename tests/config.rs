use agentchat::config::Config;
use agentchat::constants::{DEFAULT_ENDPOINT_PATH, DEFAULT_FILE_FIELD, DEFAULT_MESSAGE_FIELD};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.backend.base_url, "http://localhost:8000");
    assert_eq!(config.backend.endpoint_path, DEFAULT_ENDPOINT_PATH);
    assert_eq!(config.backend.message_field, DEFAULT_MESSAGE_FIELD);
    assert_eq!(config.backend.file_field, DEFAULT_FILE_FIELD);
    assert!(config.ui.mouse_enabled);
    assert!(config.ui.show_memory_panel);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // base_url must carry a scheme
    config.backend.base_url = "localhost:8000".to_string();
    assert!(config.validate().is_err());

    // Reset and test a relative endpoint path
    config.backend.base_url = "http://localhost:8000".to_string();
    config.backend.endpoint_path = "chat".to_string();
    assert!(config.validate().is_err());

    // Empty field names are rejected
    config.backend.endpoint_path = "/chat".to_string();
    config.backend.message_field = "  ".to_string();
    assert!(config.validate().is_err());

    config.backend.message_field = "message".to_string();
    config.ui.task_log_width = 5;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("base_url = \"http://localhost:8000\""));
    assert!(toml_str.contains("endpoint_path = \"/chat\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[backend]
endpoint_path = "/send_message"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.backend.endpoint_path, "/send_message");
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.backend.base_url, "http://localhost:8000");
    assert_eq!(config.backend.message_field, "message");
    assert!(config.ui.mouse_enabled);
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("agentchat.toml");
    std::fs::write(
        &path,
        "[backend]\nbase_url = \"https://agent.example.com\"\n",
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.backend.base_url, "https://agent.example.com");
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("agentchat.toml");
    std::fs::write(&path, "[backend]\nendpoint_path = \"chat\"\n").unwrap();

    assert!(Config::load_from_file(&path).is_err());
}

#[test]
fn test_generate_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Config::generate_default_config(&path).unwrap();

    let reloaded = Config::load_from_file(&path).unwrap();
    assert_eq!(reloaded.backend.endpoint_path, "/chat");
}

#[test]
fn test_env_override_takes_precedence() {
    let config = Config::default();
    let resolved = config
        .backend
        .resolve_base_url(Some("http://10.0.0.5:9000".to_string()));
    assert_eq!(resolved, "http://10.0.0.5:9000");

    // Blank overrides are ignored
    let resolved = config.backend.resolve_base_url(Some("   ".to_string()));
    assert_eq!(resolved, "http://localhost:8000");

    let resolved = config.backend.resolve_base_url(None);
    assert_eq!(resolved, "http://localhost:8000");
}
