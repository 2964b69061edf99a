use std::collections::HashMap;

use super::*;

fn lookup(entries: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = entries.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_env_is_empty() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig { port: DEFAULT_PORT, site_root: None });
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn parses_port_and_site_root() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", " 8080 "), ("PORTAL_SITE_ROOT", "/srv/site")])).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/site")));
}

#[test]
fn blank_site_root_is_ignored() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORTAL_SITE_ROOT", "  ")])).unwrap();
    assert_eq!(cfg.site_root, None);
}

#[test]
fn invalid_port_is_a_config_error() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ServerError::Config(_)));
    assert_eq!(err.to_string(), "config error: invalid PORT: http");
}
