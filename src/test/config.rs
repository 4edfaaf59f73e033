use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::{ConfigError, NetworkConfig};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos();
    let path = std::env::temp_dir().join(format!(
        "aegis-sim-cfg-{}-{nanos}-{name}",
        std::process::id()
    ));
    fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn parses_yaml_config() {
    let cfg = NetworkConfig::from_yaml(
        r#"
nodes:
  - name: Command Center
  - name: Relay-1
links:
  - [Command Center, Relay-1, 15]
"#,
    )
    .expect("valid yaml");

    assert_eq!(cfg.nodes.len(), 2);
    assert_eq!(cfg.nodes[0].name, "Command Center");
    assert_eq!(cfg.links.len(), 1);
    assert_eq!(cfg.links[0].0, "Command Center");
    assert_eq!(cfg.links[0].2, 15);
}

#[test]
fn parses_json_config() {
    let cfg = NetworkConfig::from_json(
        r#"{ "nodes": [{ "name": "A" }, { "name": "B" }], "links": [["A", "B", 7]] }"#,
    )
    .expect("valid json");

    assert_eq!(cfg.nodes.len(), 2);
    assert_eq!(cfg.links[0].2, 7);
}

#[test]
fn rejects_link_with_wrong_arity() {
    let short = NetworkConfig::from_yaml("nodes: []\nlinks:\n  - [A, B]\n");
    assert!(short.is_err());

    let long = NetworkConfig::from_yaml("nodes: []\nlinks:\n  - [A, B, 10, extra]\n");
    assert!(long.is_err());
}

#[test]
fn rejects_negative_latency() {
    let cfg = NetworkConfig::from_yaml("nodes: []\nlinks:\n  - [A, B, -5]\n");
    assert!(cfg.is_err());
}

#[test]
fn rejects_missing_sections() {
    assert!(NetworkConfig::from_yaml("nodes: []\n").is_err());
    assert!(NetworkConfig::from_yaml("links: []\n").is_err());
}

#[test]
fn load_dispatches_on_extension() {
    let yml = temp_file("a.yml", "nodes:\n  - name: A\nlinks: []\n");
    let cfg = NetworkConfig::load(&yml).expect("yaml file loads");
    assert_eq!(cfg.nodes[0].name, "A");
    fs::remove_file(&yml).ok();

    let json = temp_file("b.json", r#"{ "nodes": [], "links": [] }"#);
    assert!(NetworkConfig::load(&json).is_ok());
    fs::remove_file(&json).ok();
}

#[test]
fn load_rejects_unsupported_extension() {
    let path = temp_file("c.toml", "nodes = []");
    let err = NetworkConfig::load(&path).expect_err("unsupported format");
    assert!(matches!(err, ConfigError::UnsupportedFormat(ext) if ext == "toml"));
    fs::remove_file(&path).ok();
}

#[test]
fn load_missing_file_is_io_error() {
    let path = PathBuf::from("/nonexistent/aegis-sim-missing.yml");
    assert!(matches!(
        NetworkConfig::load(&path),
        Err(ConfigError::Io(_))
    ));
}
