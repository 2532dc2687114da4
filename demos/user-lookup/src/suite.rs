//! The demo test suite.
//!
//! Each case builds its own session, so no two cases observe each other's
//! stores or ledger. Cases that seed state reset the ledger before the
//! measured request, keeping setup side effects out of the assertions.

use understudy::{Fields, OutgoingRequest, Session, StoreOp, harness_test, perform_request};

use crate::component::UserLookup;

const USER: &[u8] = br#"{"id":123,"name":"Ryan"}"#;

fn request(path_with_query: &str) -> OutgoingRequest {
    let mut request = OutgoingRequest::new(Fields::new());
    request.set_path_with_query(path_with_query);
    request
}

fn known_user_returns_cached_record() {
    let session = Session::new();
    session.open_store("cache").set("123", USER);
    session.reset_calls();

    let component = UserLookup::new(session.open_store("cache"));
    let response = perform_request(&component, request("/?user_id=123")).unwrap();

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.body(), USER);

    let calls = session.ledger().calls_for("cache");
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].op,
        StoreOp::Get {
            key: "123".to_owned()
        }
    );
}

fn unknown_user_returns_404() {
    let session = Session::new();
    let component = UserLookup::new(session.open_store("cache"));

    let response = perform_request(&component, request("/?user_id=999")).unwrap();

    assert_eq!(response.status_code(), 404);
    // The miss is still recorded: the ledger reflects intent.
    assert_eq!(session.ledger().keys_read("cache"), vec!["999".to_owned()]);
}

fn missing_user_id_returns_400_without_store_traffic() {
    let session = Session::new();
    let component = UserLookup::new(session.open_store("cache"));

    let response = perform_request(&component, request("/")).unwrap();

    assert_eq!(response.status_code(), 400);
    assert!(session.ledger().calls_for("cache").is_empty());
}

harness_test!(known_user_returns_cached_record);
harness_test!(unknown_user_returns_404);
harness_test!(missing_user_id_returns_400_without_store_traffic);
