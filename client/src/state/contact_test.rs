use super::*;

#[test]
fn valid_submission_has_no_errors() {
    let errors = validate_contact("Asha", "asha@example.com", "Hello there");
    assert!(errors.is_empty());
}

#[test]
fn blank_fields_report_every_error_at_once() {
    let errors = validate_contact("", "", "");
    assert_eq!(
        errors,
        ContactErrors {
            name: Some(NAME_REQUIRED),
            email: Some(EMAIL_REQUIRED),
            message: Some(MESSAGE_REQUIRED),
        }
    );
}

#[test]
fn whitespace_only_counts_as_blank() {
    let errors = validate_contact("   ", "\t", "\n ");
    assert_eq!(errors.name, Some(NAME_REQUIRED));
    assert_eq!(errors.email, Some(EMAIL_REQUIRED));
    assert_eq!(errors.message, Some(MESSAGE_REQUIRED));
}

#[test]
fn malformed_email_is_invalid_not_missing() {
    let errors = validate_contact("Asha", "asha@example", "Hi");
    assert_eq!(errors.email, Some(EMAIL_INVALID));
    assert_eq!(errors.name, None);
    assert_eq!(errors.message, None);
}

#[test]
fn email_is_trimmed_before_matching() {
    assert!(validate_contact("Asha", "  asha@example.com  ", "Hi").is_empty());
}

#[test]
fn email_pattern_rejects_spaces_and_missing_parts() {
    assert!(!is_valid_email("a b@example.com"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("asha@.com"));
    assert!(!is_valid_email("asha@@example.com"));
    assert!(is_valid_email("first.last@sub.example.co"));
}
