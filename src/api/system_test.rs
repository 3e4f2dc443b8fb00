use super::*;

#[test]
fn checkin_log_summary_deserializes() {
    let json = serde_json::json!({
        "logs": [
            {
                "id": 10,
                "account_id": 3,
                "success": true,
                "message": "checked in",
                "created_at": "2025-06-01T08:00:00Z"
            }
        ],
        "today_checkin_account_count": 1
    })
    .to_string();
    let summary: CheckinLogSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(summary.logs.len(), 1);
    assert!(summary.logs[0].success);
    assert_eq!(summary.today_checkin_account_count, 1);
}

#[test]
fn checkin_log_summary_empty_logs() {
    let json = serde_json::json!({ "logs": [], "today_checkin_account_count": 0 }).to_string();
    let summary: CheckinLogSummary = serde_json::from_str(&json).unwrap();
    assert!(summary.logs.is_empty());
}

#[test]
fn telegram_test_response_deserializes() {
    let json = serde_json::json!({ "message": "sent" }).to_string();
    let resp: TelegramTestResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.message, "sent");
}

#[test]
fn config_map_deserializes() {
    let json = serde_json::json!({ "bot_token": "t", "chat_id": "c" }).to_string();
    let map: std::collections::HashMap<String, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(map["bot_token"], "t");
    assert_eq!(map["chat_id"], "c");
}
