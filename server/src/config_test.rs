use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(
        cfg,
        ServerConfig {
            port: DEFAULT_PORT,
            backend_url: DEFAULT_BACKEND_URL.to_owned(),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            upstream_timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    );
}

#[test]
fn values_are_parsed_and_trimmed() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", " 8080 "),
        ("BACKEND_URL", "https://api.example.com/"),
        ("BODY_LIMIT_BYTES", "1024"),
        ("UPSTREAM_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://api.example.com");
    assert_eq!(cfg.body_limit_bytes, 1024);
    assert_eq!(cfg.upstream_timeout_secs, 5);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", ""), ("BACKEND_URL", "  ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
}

#[test]
fn malformed_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned(), reason: "not a number" });
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn backend_url_needs_http_scheme() {
    let err = ServerConfig::from_lookup(lookup(&[("BACKEND_URL", "localhost:8000")])).unwrap_err();
    assert!(err.to_string().starts_with("invalid BACKEND_URL"));
}

#[test]
fn zero_timeout_is_rejected() {
    assert!(ServerConfig::from_lookup(lookup(&[("UPSTREAM_TIMEOUT_SECS", "0")])).is_err());
}
