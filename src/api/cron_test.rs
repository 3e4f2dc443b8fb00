use super::*;

#[test]
fn cron_task_deserializes() {
    let json = serde_json::json!({
        "id": 5,
        "name": "nightly",
        "cron_expr": "0 3 * * *",
        "task_type": "checkin",
        "account_ids": "1,2,3",
        "status": 1,
        "last_run": "2025-06-01T03:00:00Z",
        "next_run": null
    })
    .to_string();
    let task: CronTask = serde_json::from_str(&json).unwrap();
    assert_eq!(task.cron_expr, "0 3 * * *");
    assert_eq!(task.account_ids, "1,2,3");
    assert!(task.next_run.is_none());
}

#[test]
fn cron_task_input_omits_unset_fields() {
    let input = CronTaskInput { name: Some("nightly".to_owned()), ..CronTaskInput::default() };
    let value = serde_json::to_value(&input).unwrap();
    let map = value.as_object().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map["name"], "nightly");
}

#[test]
fn cron_task_input_full_round_trips_fields() {
    let input = CronTaskInput {
        name: Some("hourly".to_owned()),
        cron_expr: Some("0 * * * *".to_owned()),
        task_type: Some("checkin".to_owned()),
        account_ids: Some("4".to_owned()),
        status: Some(0),
    };
    let value = serde_json::to_value(&input).unwrap();
    assert_eq!(value["cron_expr"], "0 * * * *");
    assert_eq!(value["status"], 0);
}
