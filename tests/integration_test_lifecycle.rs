mod common;

use chrono::{Duration, Months, Utc};
use common::{parse_body, TestApp};
use gym_backend::background::run_sweep;
use serde_json::json;

async fn seed_with_due(app: &TestApp, name: &str, due: Option<chrono::NaiveDate>) -> String {
    let mut payload = json!({
        "member_type": "existing",
        "name": name
    });
    if let Some(d) = due {
        payload["next_due_date"] = json!(d.to_string());
    }
    let body = parse_body(app.post_json("/api/v1/members", payload).await).await;
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_sweep_archives_three_months_unpaid() {
    let app = TestApp::new().await;
    let today = Utc::now().date_naive();

    let overdue = seed_with_due(&app, "FarBehind",
        Some(today.checked_sub_months(Months::new(3)).unwrap())).await;
    let slightly_late = seed_with_due(&app, "SlightlyLate",
        Some(today.checked_sub_months(Months::new(1)).unwrap())).await;
    let current = seed_with_due(&app, "Current",
        Some(today.checked_add_months(Months::new(1)).unwrap())).await;

    let summary = run_sweep(&app.state).await.unwrap();
    assert_eq!(summary.archived, 1);

    let m = parse_body(app.get(&format!("/api/v1/members/{}", overdue)).await).await;
    assert_eq!(m["status"], "archived");

    let m = parse_body(app.get(&format!("/api/v1/members/{}", slightly_late)).await).await;
    assert_eq!(m["status"], "active");

    let m = parse_body(app.get(&format!("/api/v1/members/{}", current)).await).await;
    assert_eq!(m["status"], "active");
}

#[tokio::test]
async fn test_sweep_is_idempotent() {
    let app = TestApp::new().await;
    let today = Utc::now().date_naive();

    seed_with_due(&app, "FarBehind",
        Some(today.checked_sub_months(Months::new(4)).unwrap())).await;
    seed_with_due(&app, "ReminderDue", Some(today + Duration::days(3))).await;

    let first = run_sweep(&app.state).await.unwrap();
    assert_eq!(first.archived, 1);
    assert_eq!(first.reminders, 1);

    // Nothing changed since, so a second pass is a no-op.
    let second = run_sweep(&app.state).await.unwrap();
    assert_eq!(second.archived, 0);
    assert_eq!(second.reminders, 0);
}

#[tokio::test]
async fn test_reminder_fires_at_three_days_and_is_stamped() {
    let app = TestApp::new().await;
    let today = Utc::now().date_naive();

    let due_in_three = seed_with_due(&app, "ThreeDays", Some(today + Duration::days(3))).await;
    seed_with_due(&app, "FourDays", Some(today + Duration::days(4))).await;
    seed_with_due(&app, "NoDate", None).await;

    let summary = run_sweep(&app.state).await.unwrap();
    assert_eq!(summary.reminders, 1);

    let delivered = app.notifier.delivered.lock().unwrap().clone();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].0, due_in_three);
    assert_eq!(delivered[0].1, today + Duration::days(3));

    let m = parse_body(app.get(&format!("/api/v1/members/{}", due_in_three)).await).await;
    assert_eq!(m["last_reminder_sent"], today.to_string());
    assert_eq!(m["due_status"], "DUE SOON");
}

#[tokio::test]
async fn test_sweep_never_unarchives() {
    let app = TestApp::new().await;
    let today = Utc::now().date_naive();

    let id = seed_with_due(&app, "ManuallyArchived",
        Some(today.checked_add_months(Months::new(1)).unwrap())).await;
    app.state.member_repo.set_status(&id, "archived").await.unwrap();

    run_sweep(&app.state).await.unwrap();

    let m = parse_body(app.get(&format!("/api/v1/members/{}", id)).await).await;
    assert_eq!(m["status"], "archived");
}

#[tokio::test]
async fn test_registered_member_left_unpaid_gets_archived() {
    let app = TestApp::new().await;
    let today = Utc::now().date_naive();
    // Registered four months ago, never paid since: first due date was
    // three months ago, so unpaid months are over the threshold.
    let registration_date = today.checked_sub_months(Months::new(4)).unwrap();

    let created = parse_body(app.post_json("/api/v1/members", json!({
        "member_type": "new",
        "name": "GhostedUs",
        "phone": "9876570001",
        "membership_fee": 1000,
        "membership_method": "cash",
        "registration_date": registration_date.to_string()
    })).await).await;
    let id = created["id"].as_str().unwrap();
    assert!(created["unpaid_months"].as_i64().unwrap() >= 3);

    run_sweep(&app.state).await.unwrap();

    let m = parse_body(app.get(&format!("/api/v1/members/{}", id)).await).await;
    assert_eq!(m["status"], "archived");
}
