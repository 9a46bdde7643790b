// Config loading and validation tests

use devportal::config::AppConfig;

const VALID_CONFIG: &str = r#"
[server]
port = 8081
host = "0.0.0.0"

[api]
base_url = "https://portal.example.com"
timeout_secs = 20
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.api.base_url, "https://portal.example.com");
    assert_eq!(config.api.timeout_secs, 20);
}

#[test]
fn test_config_timeout_defaults_when_absent() {
    let config = AppConfig::load_from_str(&VALID_CONFIG.replace("timeout_secs = 20", ""))
        .expect("load_from_str");
    assert_eq!(config.api.timeout_secs, 20);
}

#[test]
fn test_config_validation_rejects_invalid_port() {
    let bad = VALID_CONFIG.replace("port = 8081", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_non_http_base_url() {
    let bad = VALID_CONFIG.replace(
        "base_url = \"https://portal.example.com\"",
        "base_url = \"portal.example.com\"",
    );
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("api.base_url"));
}

#[test]
fn test_config_validation_rejects_zero_timeout() {
    let bad = VALID_CONFIG.replace("timeout_secs = 20", "timeout_secs = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("api.timeout_secs"));
}
