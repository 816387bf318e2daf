use super::*;

#[test]
fn default_config_is_simulated() {
    let config = SubmitConfig::default();
    assert!(config.is_simulated());
    assert_eq!(config.simulated_delay_ms, 2000);
}

#[test]
fn with_endpoint_disables_simulation() {
    let config = SubmitConfig::with_endpoint("https://verify.example/api/images");
    assert!(!config.is_simulated());
    assert_eq!(config.endpoint.as_deref(), Some("https://verify.example/api/images"));
    assert_eq!(config.simulated_delay_ms, SIMULATED_DELAY_MS);
}

#[test]
fn simulated_report_scores_98() {
    assert_eq!(VerificationReport::simulated().integrity_score, 98);
}

#[test]
fn check_status_accepts_2xx() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(204), Ok(()));
    assert_eq!(check_status(299), Ok(()));
}

#[test]
fn check_status_rejects_everything_else() {
    assert_eq!(check_status(199), Err(SubmitError::Status(199)));
    assert_eq!(check_status(302), Err(SubmitError::Status(302)));
    assert_eq!(check_status(404), Err(SubmitError::Status(404)));
    assert_eq!(check_status(500), Err(SubmitError::Status(500)));
}

#[test]
fn parse_report_reads_integrity_score() {
    let report = parse_report(r#"{"integrity_score": 87, "extra": "ignored"}"#).unwrap();
    assert_eq!(report.integrity_score, 87);
}

#[test]
fn parse_report_rejects_missing_score() {
    assert!(matches!(parse_report(r#"{"ok": true}"#), Err(SubmitError::InvalidResponse(_))));
}

#[test]
fn parse_report_rejects_non_json() {
    assert!(matches!(parse_report("<html>"), Err(SubmitError::InvalidResponse(_))));
}

#[test]
fn parse_report_rejects_out_of_range_score() {
    assert!(matches!(parse_report(r#"{"integrity_score": 150}"#), Err(SubmitError::InvalidResponse(_))));
}

#[test]
fn submit_error_messages_include_detail() {
    assert_eq!(SubmitError::Status(503).to_string(), "verification failed: status 503");
    assert_eq!(
        SubmitError::Transport("offline".to_owned()).to_string(),
        "verification request failed: offline"
    );
}
