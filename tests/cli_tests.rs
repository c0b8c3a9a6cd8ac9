mod common;
use common::{page_json, serve, shift, tga};
use predicates::prelude::*;
use predicates::str::contains;
use std::time::Duration;
use transgo_admin::cli::commands::edit::parse_edit;
use transgo_admin::config::TOKEN_ENV;
use transgo_admin::errors::AppError;
use transgo_admin::models::{FieldValue, ShiftField, ShiftType};

const WAIT: Duration = Duration::from_secs(5);

#[test]
fn test_help_lists_commands() {
    tga()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("shifts"))
        .stdout(contains("journal"))
        .stdout(contains("config"));
}

#[test]
fn test_config_print_masks_token() {
    tga()
        .args(["--test", "--token", "abcdef123456", "config", "--print"])
        .env_remove(TOKEN_ENV)
        .assert()
        .success()
        .stdout(contains("api_base_url"))
        .stdout(contains("****3456"))
        .stdout(contains("abcdef").not());
}

#[test]
fn test_init_in_test_mode_writes_nothing() {
    tga()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("Test mode"));
}

#[test]
fn test_missing_token_fails() {
    tga()
        .args(["--test", "shifts", "list", "--date", "2025-10-01"])
        .env_remove(TOKEN_ENV)
        .assert()
        .failure()
        .stderr(contains("Missing API token"));
}

#[test]
fn test_token_from_environment() {
    let (base, rx) = serve(vec![(200, page_json(&[]))]);

    tga()
        .args(["--test", "--api-url", &base, "shifts", "list", "--date", "2025-10-01"])
        .env(TOKEN_ENV, "env-token")
        .assert()
        .success()
        .stdout(contains("No shifts found"));

    let req = rx.recv_timeout(WAIT).unwrap();
    assert_eq!(req.header("authorization"), Some("Bearer env-token"));
}

#[test]
fn test_invalid_date_rejected() {
    tga()
        .args(["--test", "--token", "t", "shifts", "list", "--date", "01/10/2025"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_shifts_list_renders_table() {
    let rows = vec![
        shift(1, ShiftType::ShiftPagi, 2, "ready"),
        shift(2, ShiftType::ShiftMalam, 3, ""),
    ];
    let (base, rx) = serve(vec![(200, page_json(&rows))]);

    tga()
        .args([
            "--test", "--api-url", &base, "--token", "t0k3n", "shifts", "list", "--date",
            "2025-10-01", "-q", "driver", "--limit", "25",
        ])
        .assert()
        .success()
        .stdout(contains("Driver 1"))
        .stdout(contains("Malam"))
        .stdout(contains("23:00"))
        .stdout(contains("ready"));

    let req = rx.recv_timeout(WAIT).unwrap();
    assert!(req.target.contains("q=driver"));
    assert!(req.target.contains("limit=25"));
}

#[test]
fn test_shifts_list_backend_error() {
    let (base, _rx) = serve(vec![(503, r#"{"message":"maintenance"}"#.into())]);

    tga()
        .args([
            "--test", "--api-url", &base, "--token", "t0k3n", "shifts", "list", "--date",
            "2025-10-01",
        ])
        .assert()
        .failure()
        .stderr(contains("503"));
}

// ---------------------------
// shifts edit
// ---------------------------

#[test]
fn test_parse_edit_expression() {
    let e = parse_edit("12:shift_type=shift_sore").unwrap();
    assert_eq!(e.row_id, 12);
    assert_eq!(e.field, ShiftField::ShiftType);
    assert_eq!(e.value, FieldValue::text("shift_sore"));

    let e = parse_edit("3:notes=pick up at 08:00 = gate 2").unwrap();
    assert_eq!(e.field, ShiftField::Notes);
    assert_eq!(e.value, FieldValue::text("pick up at 08:00 = gate 2"));

    let e = parse_edit("4:start=08:30:00").unwrap();
    assert_eq!(e.value, FieldValue::text("08:30"));

    let e = parse_edit("4:location=").unwrap();
    assert_eq!(e.value, FieldValue::Empty);

    let e = parse_edit("5:shift_type=Shift_Pagi").unwrap();
    assert_eq!(e.value, FieldValue::text("shift_pagi"));

    let e = parse_edit("5:notes= gate 2 ").unwrap();
    assert_eq!(e.value, FieldValue::text(" gate 2 "));

    let e = parse_edit("5:notes=").unwrap();
    assert_eq!(e.value, FieldValue::Empty);

    assert!(matches!(parse_edit("x:notes=a"), Err(AppError::InvalidEdit(_))));
    assert!(matches!(parse_edit("4-notes"), Err(AppError::InvalidEdit(_))));
    assert!(matches!(parse_edit("4:colour=red"), Err(AppError::InvalidField(_))));
    assert!(matches!(parse_edit("4:start=8:30"), Err(AppError::InvalidTime(_))));
    assert!(matches!(
        parse_edit("4:location=pool"),
        Err(AppError::InvalidValue { .. })
    ));
    assert!(matches!(
        parse_edit("4:shift_type=brunch"),
        Err(AppError::InvalidValue { .. })
    ));
}

#[test]
fn test_edit_same_shift_in_other_case_sends_nothing() {
    let rows = vec![shift(1, ShiftType::ShiftPagi, 2, "")];
    let (base, rx) = serve(vec![(200, page_json(&rows))]);

    tga()
        .args([
            "--test", "--api-url", &base, "--token", "t0k3n", "shifts", "edit", "--date",
            "2025-10-01", "--set", "1:shift_type=Shift_Pagi",
        ])
        .assert()
        .success()
        .stdout(contains("Nothing to save."));

    assert_eq!(rx.recv_timeout(WAIT).unwrap().method, "GET");
    assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
}

#[test]
fn test_edit_rejects_bad_set_before_any_request() {
    tga()
        .args([
            "--test", "--api-url", "http://127.0.0.1:9", "--token", "t0k3n", "shifts", "edit",
            "--date", "2025-10-01", "--set", "1:colour=red",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid field"));
}

#[test]
fn test_edit_saves_only_changed_row() {
    let rows = vec![
        shift(1, ShiftType::ShiftPagi, 2, ""),
        shift(2, ShiftType::ShiftPagi, 2, ""),
    ];
    let mut after = rows.clone();
    after[0].shift_type = Some(ShiftType::ShiftSore);

    let (base, rx) = serve(vec![
        (200, page_json(&rows)),
        (200, "{}".into()),
        (200, page_json(&after)),
    ]);

    tga()
        .args([
            "--test",
            "--api-url",
            &base,
            "--token",
            "t0k3n",
            "shifts",
            "edit",
            "--date",
            "2025-10-01",
            "--set",
            "1:shift_type=shift_sore",
            "--set",
            "2:notes=",
        ])
        .assert()
        .success()
        .stdout(contains("All changes saved (1 row(s))."));

    let list = rx.recv_timeout(WAIT).unwrap();
    assert_eq!(list.method, "GET");

    let patch = rx.recv_timeout(WAIT).unwrap();
    assert_eq!(patch.method, "PATCH");
    assert_eq!(patch.target, "/driver-shifts/1");
    let body: serde_json::Value = serde_json::from_str(&patch.body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "shift_type": "shift_sore",
            "location_id": 2,
            "custom_start_time": "15:00",
            "custom_end_time": "23:00",
            "notes": ""
        })
    );

    let refresh = rx.recv_timeout(WAIT).unwrap();
    assert_eq!(refresh.method, "GET");
}

#[test]
fn test_edit_without_changes_sends_nothing() {
    let rows = vec![shift(1, ShiftType::ShiftPagi, 2, "")];
    let (base, rx) = serve(vec![(200, page_json(&rows))]);

    tga()
        .args([
            "--test", "--api-url", &base, "--token", "t0k3n", "shifts", "edit", "--date",
            "2025-10-01", "--set", "1:start=07:00",
        ])
        .assert()
        .success()
        .stdout(contains("Nothing to save."));

    assert_eq!(rx.recv_timeout(WAIT).unwrap().method, "GET");
    assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
}

#[test]
fn test_edit_dry_run_previews_payload() {
    let rows = vec![shift(1, ShiftType::ShiftPagi, 2, "")];
    let (base, rx) = serve(vec![(200, page_json(&rows))]);

    tga()
        .args([
            "--test", "--api-url", &base, "--token", "t0k3n", "shifts", "edit", "--date",
            "2025-10-01", "--set", "1:location=", "--dry-run",
        ])
        .assert()
        .success()
        .stdout(contains("would be skipped: invalid reference"));

    assert_eq!(rx.recv_timeout(WAIT).unwrap().method, "GET");
    assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
}

#[test]
fn test_edit_partial_failure_exits_non_zero() {
    let rows = vec![
        shift(1, ShiftType::ShiftPagi, 2, ""),
        shift(2, ShiftType::ShiftPagi, 2, ""),
    ];
    let (base, _rx) = serve(vec![
        (200, page_json(&rows)),
        (500, r#"{"message":"locked"}"#.into()),
        (200, "{}".into()),
        (200, page_json(&rows)),
    ]);

    tga()
        .args([
            "--test", "--api-url", &base, "--token", "t0k3n", "shifts", "edit", "--date",
            "2025-10-01", "--set", "1:notes=a", "--set", "2:notes=b",
        ])
        .assert()
        .failure()
        .stdout(contains("1 saved, 1 failed, 0 skipped"))
        .stderr(contains("row 1 failed"));
}

#[test]
fn test_edit_unknown_row() {
    let rows = vec![shift(1, ShiftType::ShiftPagi, 2, "")];
    let (base, _rx) = serve(vec![(200, page_json(&rows))]);

    tga()
        .args([
            "--test", "--api-url", &base, "--token", "t0k3n", "shifts", "edit", "--date",
            "2025-10-01", "--set", "77:notes=x",
        ])
        .assert()
        .failure()
        .stderr(contains("Row 77"));
}

// ---------------------------
// shifts browse
// ---------------------------

#[test]
fn test_browse_reads_queries_from_stdin() {
    let rows = vec![shift(1, ShiftType::ShiftPagi, 2, "")];
    // the two fetches may reach the server in either order
    let (base, rx) = serve(vec![(200, page_json(&rows)), (200, page_json(&rows))]);

    tga()
        .args([
            "--test", "--api-url", &base, "--token", "t0k3n", "shifts", "browse", "--date",
            "2025-10-01",
        ])
        .write_stdin("bu\nbud\nbudi\n")
        .timeout(Duration::from_secs(20))
        .assert()
        .success()
        .stdout(contains("Driver 1"));

    let mut targets = vec![
        rx.recv_timeout(WAIT).unwrap().target,
        rx.recv_timeout(WAIT).unwrap().target,
    ];
    assert!(targets.iter().any(|t| t.contains("q=budi")));
    assert!(targets.iter().any(|t| t.contains("q=&")));
}
