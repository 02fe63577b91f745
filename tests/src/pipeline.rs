use anyhow::Result;
use codemelli_core::{FailureReason, Verdict, is_valid, normalize, validate, validate_or_fail};

#[test]
fn known_valid_code_passes_every_stage() {
    let verdict = validate(Some("0499370899"));
    assert_eq!(
        verdict,
        Verdict::Valid {
            code: "0499370899".to_string()
        }
    );
}

#[test]
fn persian_input_normalizes_then_validates() {
    let verdict = validate(Some("۰۴۹۹۳۷۰۸۹۹"));
    assert!(verdict.is_valid());
    assert_eq!(verdict.normalized(), Some("0499370899"));
}

#[test]
fn arabic_input_normalizes_then_validates() {
    let verdict = validate(Some("٠٤٩٩٣٧٠٨٩٩"));
    assert!(verdict.is_valid());
    assert_eq!(verdict.normalized(), Some("0499370899"));
}

#[test]
fn checksum_failure_reports_normalized_code() {
    let verdict = validate(Some("1234567890"));
    assert_eq!(
        verdict,
        Verdict::Invalid {
            reason: FailureReason::Checksum,
            normalized: Some("1234567890".to_string()),
        }
    );
}

#[test]
fn repeated_digits_fail_before_checksum() {
    let verdict = validate(Some("1111111111"));
    assert_eq!(verdict.reason(), Some(FailureReason::AllSameDigits));
    assert_eq!(verdict.normalized(), Some("1111111111"));
}

#[test]
fn absent_or_digitless_input_is_empty() {
    for input in [None, Some(""), Some("  "), Some("no digits here")] {
        let verdict = validate(input);
        assert_eq!(verdict.reason(), Some(FailureReason::Empty));
        assert_eq!(verdict.normalized(), None);
    }
}

#[test]
fn partial_digits_report_length_failure_with_diagnostics() {
    let verdict = validate(Some("12-34"));
    assert_eq!(verdict.reason(), Some(FailureReason::LengthOrNotDigits));
    assert_eq!(verdict.normalized(), Some("1234"));
}

#[test]
fn check_digit_boundary_remainders() {
    // R = 0 and R = 1 keep the remainder itself; R >= 2 uses 11 - R.
    assert!(is_valid(Some("0100000010")));
    assert!(is_valid(Some("1000000011")));
    assert!(is_valid(Some("0499370899")));
}

#[test]
fn raising_variant_round_trips_the_valid_code() -> Result<()> {
    let code = validate_or_fail(Some("  ۰۴۹۹۳۷۰۸۹۹  "))?;
    assert_eq!(code, "0499370899");
    Ok(())
}

#[test]
fn raising_variant_message_names_reason_and_code() {
    let err = validate_or_fail(Some("1234567890")).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("checksum"), "message was: {msg}");
    assert!(msg.contains("1234567890"), "message was: {msg}");
}

#[test]
fn normalization_is_idempotent_across_the_pipeline() {
    for input in ["۱۲۳", "12-34", "0499370899", "id ٥٥"] {
        let once = normalize(Some(input));
        assert_eq!(normalize(Some(once.as_str())), once);
        // A normalized string validates identically to its source.
        assert_eq!(
            validate(Some(input)).reason(),
            validate(Some(once.as_str())).reason()
        );
    }
}
