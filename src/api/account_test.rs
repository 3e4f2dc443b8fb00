use super::*;

fn sample_account_json() -> String {
    serde_json::json!({
        "id": 3,
        "name": "main",
        "user_id": 42,
        "username": "alice",
        "role": 2,
        "status": 1,
        "last_checkin": "2025-06-01T08:00:00Z",
        "last_result": "ok"
    })
    .to_string()
}

#[test]
fn account_deserializes() {
    let account: Account = serde_json::from_str(&sample_account_json()).unwrap();
    assert_eq!(account.id, 3);
    assert_eq!(account.name, "main");
    assert_eq!(account.last_result.as_deref(), Some("ok"));
}

#[test]
fn account_null_checkin_fields() {
    let json = serde_json::json!({
        "id": 1,
        "name": "fresh",
        "user_id": 7,
        "username": "bob",
        "role": 0,
        "status": 1,
        "last_checkin": null,
        "last_result": null
    })
    .to_string();
    let account: Account = serde_json::from_str(&json).unwrap();
    assert!(account.last_checkin.is_none());
    assert!(account.last_result.is_none());
}

#[test]
fn session_info_deserializes() {
    let json = serde_json::json!({
        "user_id": 42,
        "username": "alice",
        "role": 2,
        "status": 1,
        "group": "supporters"
    })
    .to_string();
    let info: SessionInfo = serde_json::from_str(&json).unwrap();
    assert_eq!(info.user_id, 42);
    assert_eq!(info.group, "supporters");
}

#[test]
fn checkin_result_deserializes() {
    let json = serde_json::json!({ "success": false, "result": "session expired" }).to_string();
    let result: CheckinResult = serde_json::from_str(&json).unwrap();
    assert!(!result.success);
    assert_eq!(result.result, "session expired");
}
