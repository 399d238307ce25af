#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use herdwatch_gateway::config::{self, RefreshMissing};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
gateway:
  listen: "0.0.0.0:8080"
store:
  default_limit: 5 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.gateway.listen, "0.0.0.0:8080");
    assert_eq!(cfg.store.default_query_limit, 10);
    assert_eq!(cfg.store.max_query_limit, 100);
    assert_eq!(cfg.store.refresh_missing, RefreshMissing::Ignore);
    assert!(cfg.store.seed_animals.is_empty());
}

#[test]
fn full_config_parses() {
    let ok = r#"
version: 1
gateway:
  listen: "127.0.0.1:9000"
store:
  default_query_limit: 20
  max_query_limit: 50
  refresh_missing: reject
  seed_animals: ["1", "2"]
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.gateway.listen_addr().unwrap().port(), 9000);
    assert_eq!(cfg.store.refresh_missing, RefreshMissing::Reject);
    assert_eq!(cfg.store.seed_animals, vec!["1", "2"]);
}

#[test]
fn unsupported_version_fails() {
    assert!(config::load_from_str("version: 2\n").is_err());
}

#[test]
fn default_limit_above_max_fails() {
    let bad = r#"
version: 1
store:
  default_query_limit: 50
  max_query_limit: 20
"#;
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn bad_listen_address_fails() {
    let bad = r#"
version: 1
gateway:
  listen: "not-an-addr"
"#;
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn empty_seed_id_fails() {
    let bad = r#"
version: 1
store:
  seed_animals: ["1", " "]
"#;
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn shipped_config_is_valid() {
    let cfg = config::load_from_file("../../herdwatch.yaml").expect("repo config must load");
    assert_eq!(cfg.store.seed_animals.len(), 3);
}
