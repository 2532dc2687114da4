//! Registry dispatch exercised through the facade, the way an external
//! runner consumes it: enumerate, dispatch by name, distinguish unknown
//! names from failing tests.

use understudy::{RegistryError, Session, TestRegistry, harness_test};

fn cache_round_trip() {
    let session = Session::new();
    let cache = session.open_store("cache");
    cache.set("k", b"v".to_vec());
    assert_eq!(cache.get("k"), Some(b"v".to_vec()));
}

fn ledger_starts_empty() {
    let session = Session::new();
    assert!(session.ledger().is_empty());
}

harness_test!(cache_round_trip);
harness_test!(ledger_starts_empty);

#[test]
fn discovered_suite_is_enumerable_and_dispatchable() {
    let registry = TestRegistry::discover();

    assert!(registry.contains("cache_round_trip"));
    assert!(registry.contains("ledger_starts_empty"));
    assert_eq!(registry.list().len(), registry.len());

    registry.run("cache_round_trip").unwrap();
    registry.run("ledger_starts_empty").unwrap();
}

#[test]
fn unknown_name_is_not_a_test_failure() {
    let registry = TestRegistry::discover();
    assert_eq!(
        registry.run("missing").err(),
        Some(RegistryError::UnknownTest("missing".to_owned()))
    );
    assert!(!registry.list().contains(&"missing"));
}
