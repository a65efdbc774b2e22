#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::path::Path;

use policyfeed_core::PolicyFeedError;
use policyfeed_gateway::config::{self, schema::SERVICE_DIR};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
data:
  csv_pth: "data/other.csv" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, PolicyFeedError::Config(_)), "got {err:?}");
    assert!(err.to_string().contains("csv_pth"));
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "127.0.0.1:3000");
    assert!(!cfg.data.cache);
    assert_eq!(
        cfg.data.resolved_csv_path(),
        Path::new(SERVICE_DIR).join("data/policies.csv")
    );
}

#[test]
fn absolute_csv_path_is_kept() {
    let ok = r#"
version: 1
server:
  listen: "0.0.0.0:8081"
data:
  csv_path: "/srv/policyfeed/policies.csv"
  cache: true
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 8081);
    assert_eq!(cfg.data.resolved_csv_path(), Path::new("/srv/policyfeed/policies.csv"));
    assert!(cfg.data.cache);
}

#[test]
fn rejects_bad_listen_and_version() {
    for bad in [
        "version: 1\nserver:\n  listen: \"localhost\"\n",
        "version: 2\n",
        "version: 1\ndata:\n  csv_path: \"  \"\n",
    ] {
        let err = config::load_from_str(bad).expect_err(bad);
        assert!(matches!(err, PolicyFeedError::Config(_)), "got {err:?}");
    }
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("policyfeed.yaml");
    let cfg = config::load_or_default(path.to_str().unwrap()).expect("defaults");
    assert_eq!(cfg.server.listen, "127.0.0.1:3000");

    std::fs::write(&path, "version: 1\nserver:\n  listen: \"127.0.0.1:4000\"\n").unwrap();
    let cfg = config::load_or_default(path.to_str().unwrap()).expect("file");
    assert_eq!(cfg.server.listen, "127.0.0.1:4000");
}

#[test]
fn bundled_sample_data_loads() {
    let cfg = config::load_from_str("version: 1\n").unwrap();
    let rows = policyfeed_core::policy::load_policies(&cfg.data.resolved_csv_path()).unwrap();
    assert!(!rows.is_empty());
}
