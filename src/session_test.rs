use super::*;
use crate::storage::MemoryTokenStore;

fn session_with_store() -> (SessionStore, Arc<MemoryTokenStore>) {
    let store = Arc::new(MemoryTokenStore::default());
    (SessionStore::new(store.clone()), store)
}

// =============================================================================
// initialize
// =============================================================================

#[test]
fn initialize_absent_token_stays_logged_out() {
    let (session, _store) = session_with_store();
    session.initialize();
    assert!(!session.is_logged_in());
    assert_eq!(session.token(), "");
}

#[test]
fn initialize_picks_up_persisted_token() {
    let (session, store) = session_with_store();
    store.save("tok-persisted").unwrap();
    session.initialize();
    assert!(session.is_logged_in());
    assert_eq!(session.token(), "tok-persisted");
}

#[test]
fn initialize_never_restores_username() {
    let (session, store) = session_with_store();
    store.save("tok").unwrap();
    session.set_user("alice");
    session.initialize();
    assert_eq!(session.username(), "");
}

// =============================================================================
// set_token
// =============================================================================

#[test]
fn set_token_logs_in() {
    let (session, _store) = session_with_store();
    session.set_token("tok-1");
    assert!(session.is_logged_in());
    assert_eq!(session.token(), "tok-1");
}

#[test]
fn set_token_persists() {
    let (session, store) = session_with_store();
    session.set_token("tok-1");
    assert_eq!(store.load(), "tok-1");
}

#[test]
fn set_empty_token_is_logged_out() {
    let (session, _store) = session_with_store();
    session.set_token("tok-1");
    session.set_token("");
    assert!(!session.is_logged_in());
}

// =============================================================================
// set_user
// =============================================================================

#[test]
fn set_user_updates_username() {
    let (session, _store) = session_with_store();
    session.set_user("alice");
    assert_eq!(session.username(), "alice");
}

#[test]
fn set_user_does_not_persist_or_log_in() {
    let (session, store) = session_with_store();
    session.set_user("alice");
    assert!(!session.is_logged_in());
    assert!(!store.is_present());
}

// =============================================================================
// logout
// =============================================================================

#[test]
fn logout_clears_everything() {
    let (session, store) = session_with_store();
    session.set_token("tok-1");
    session.set_user("alice");
    session.logout();
    assert!(!session.is_logged_in());
    assert_eq!(session.token(), "");
    assert_eq!(session.username(), "");
    assert!(!store.is_present());
}

#[test]
fn logout_twice_is_idempotent() {
    let (session, store) = session_with_store();
    session.set_token("tok-1");
    session.logout();
    session.logout();
    assert!(!session.is_logged_in());
    assert_eq!(session.username(), "");
    assert!(!store.is_present());
}
