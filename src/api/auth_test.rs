use super::*;

#[test]
fn login_response_deserializes() {
    let json = serde_json::json!({ "token": "tok-abc" }).to_string();
    let resp: LoginResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.token, "tok-abc");
}

#[test]
fn login_response_missing_token_is_error() {
    let json = serde_json::json!({}).to_string();
    assert!(serde_json::from_str::<LoginResponse>(&json).is_err());
}

#[test]
fn profile_response_deserializes() {
    let json = serde_json::json!({ "username": "admin" }).to_string();
    let resp: ProfileResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.username, "admin");
}
