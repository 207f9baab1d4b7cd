#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;

use guides_admin::config;
use guides_core::GuidesError;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn missing_port_is_fatal() {
    let err = config::load_from_vars(vars(&[])).expect_err("must fail");
    assert!(matches!(err, GuidesError::MissingEnv("PORT")));
    assert!(err.is_fatal());
    assert_eq!(err.to_string(), "$PORT must be set");
}

#[test]
fn blank_port_counts_as_missing() {
    let err = config::load_from_vars(vars(&[("PORT", "  ")])).expect_err("must fail");
    assert!(matches!(err, GuidesError::MissingEnv(_)));
}

#[test]
fn non_numeric_port_is_rejected() {
    let err = config::load_from_vars(vars(&[("PORT", "http")])).expect_err("must fail");
    assert!(matches!(err, GuidesError::InvalidConfig(_)));

    let err = config::load_from_vars(vars(&[("PORT", "70000")])).expect_err("must fail");
    assert!(matches!(err, GuidesError::InvalidConfig(_)));
}

#[test]
fn port_zero_is_rejected() {
    let err = config::load_from_vars(vars(&[("PORT", "0")])).expect_err("must fail");
    assert!(matches!(err, GuidesError::InvalidConfig(_)));
}

#[test]
fn valid_port_binds_all_interfaces() {
    let cfg = config::load_from_vars(vars(&[("PORT", "8080")])).expect("must parse");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.listen_addr().to_string(), "0.0.0.0:8080");
}
