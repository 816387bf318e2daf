use super::*;

#[test]
fn defaults_when_unset() {
    let cfg = SiteConfig::from_values(None, None).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn explicit_values_override_defaults() {
    let cfg = SiteConfig::from_values(Some("127.0.0.1"), Some("8080")).unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = SiteConfig::from_values(Some("  "), Some("")).unwrap();
    assert_eq!(cfg, SiteConfig { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT });
}

#[test]
fn port_is_trimmed() {
    assert_eq!(parse_port(Some(" 4000 ")), Ok(4000));
}

#[test]
fn invalid_port_is_an_error() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".to_owned())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".to_owned())));
}

#[test]
fn invalid_port_message_names_the_value() {
    assert_eq!(ConfigError::InvalidPort("abc".to_owned()).to_string(), "invalid PORT: abc");
}
