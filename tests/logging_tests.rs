//! 日志配置功能测试

use langid::infrastructure::config::{Config, Logging};

#[test]
fn test_log_level_parsing() {
    let cases = [
        ("DEBUG", "debug"),
        ("INFO", "info"),
        ("WARN", "warn"),
        ("ERROR", "error"),
        ("info", "info"),
        ("TRACE", "warn"),
        ("", "warn"),
    ];

    for (level, expected) in cases {
        let logging = Logging {
            level: level.to_string(),
            ..Logging::default()
        };
        assert_eq!(logging.filter_directive(), expected, "level {:?}", level);
    }
}

#[test]
fn test_log_level_default() {
    let logging = Config::default().logging;

    assert!(logging.enable);
    assert!(logging.path.is_none());
    assert_eq!(logging.level, "WARN");
    assert_eq!(logging.filter_directive(), "warn");
}

#[test]
fn test_logging_section_is_optional() {
    let config: Config = toml::from_str("theme = \"wudao\"").unwrap();
    assert_eq!(config.theme, "wudao");
    assert!(config.logging.enable);
}
