use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn reads_host_port_and_site_dir() {
    let cfg = ServerConfig::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", "8080"), ("SITE_DIR", "target/site")]))
        .unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.site_dir, Some(PathBuf::from("target/site")));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("HOST", " "), ("PORT", ""), ("SITE_DIR", "")])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn rejects_bad_port() {
    for bad in ["abc", "0", "70000", "-1"] {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", bad)])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort { value: bad.to_owned() });
    }
}

#[test]
fn rejects_bad_host() {
    let err = ServerConfig::from_lookup(lookup(&[("HOST", "localhost")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidHost { value: "localhost".to_owned() });
    assert!(err.to_string().contains("HOST"));
}

#[test]
fn ipv6_host_is_accepted() {
    let cfg = ServerConfig::from_lookup(lookup(&[("HOST", "::1"), ("PORT", "4000")])).unwrap();
    assert_eq!(cfg.addr().to_string(), "[::1]:4000");
}
