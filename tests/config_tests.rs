//! 配置功能测试

use langid::domain::model::DetectionMethod;
use langid::infrastructure::config::{load_config_from, write_config_sample, Config};

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.endpoint, "http://127.0.0.1:5001");
    assert_eq!(config.default_method, DetectionMethod::Both);
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.theme, "temp");
    assert!(config.http_proxy.is_none());
    assert!(config.enable_emoji);
    assert!(config.animate);
}

#[test]
fn test_config_toml_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
endpoint = "https://lang.example.com"
default_method = "pretrained"
timeout_secs = 5
http_proxy = "http://127.0.0.1:7890"
enable_emoji = false
animate = false

[logging]
enable = true
path = "/tmp/test.log"
level = "DEBUG"
"#,
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.endpoint, "https://lang.example.com");
    assert_eq!(config.default_method, DetectionMethod::Pretrained);
    assert_eq!(config.timeout_secs, 5);
    assert_eq!(config.http_proxy.as_deref(), Some("http://127.0.0.1:7890"));
    assert!(!config.enable_emoji);
    assert!(!config.animate);
    assert_eq!(config.logging.path.as_deref(), Some("/tmp/test.log"));
    assert_eq!(config.logging.level, "DEBUG");
    assert_eq!(config.url_for("detect"), "https://lang.example.com/detect");
}

#[test]
fn test_missing_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.default_method, DetectionMethod::Both);
}

#[test]
fn test_malformed_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "default_method = \"fastest\"\ntimeout_secs = [").unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.default_method, DetectionMethod::Both);
    assert_eq!(config.timeout_secs, 30);
}

#[test]
fn test_generated_sample_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("langid").join("config.toml");

    assert!(write_config_sample(&path).unwrap());
    // 已存在时不覆盖
    assert!(!write_config_sample(&path).unwrap());

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("default_method = \"both\""));
    assert!(content.contains("[logging]"));

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.endpoint, Config::default().endpoint);
}
