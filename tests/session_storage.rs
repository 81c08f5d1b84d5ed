#![cfg(target_arch = "wasm32")]

use bookstay::models::AuthUser;
use bookstay::stores::session_store;
use bookstay::utils::storage;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn user() -> AuthUser {
    AuthUser {
        id: "u1".to_string(),
        name: "Alex".to_string(),
        email: "alex@example.com".to_string(),
        token: "t1".to_string(),
    }
}

#[wasm_bindgen_test]
fn save_then_load_round_trips_the_session() {
    session_store::clear();
    session_store::save(&user()).unwrap();

    let session = session_store::load();
    assert!(session.logged_in());
    assert_eq!(session.token(), Some("t1"));
    assert_eq!(session.user.unwrap().email, "alex@example.com");
}

#[wasm_bindgen_test]
fn clear_leaves_an_empty_session() {
    session_store::save(&user()).unwrap();
    session_store::clear();

    let session = session_store::load();
    assert!(!session.logged_in());
    assert_eq!(session.token(), None);
}

#[wasm_bindgen_test]
fn malformed_user_entry_reads_as_absent() {
    session_store::clear();
    storage::save_raw("user", "{not json").unwrap();

    let session = session_store::load();
    assert!(!session.logged_in());
}
