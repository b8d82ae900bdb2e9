use gastech_core::{validate_all, validate_record, Diagnostics, Severity, ValidationError, Violation};
use serde_json::{json, Value};

fn record(id: &str, tier: &str) -> Value {
    json!({
        "id": id,
        "name": "Propane (C₃H₈)",
        "tier": tier,
        "type": "Fuel Gas",
        "focus": "Properties",
        "admin": "LPG",
        "benefit": "Portable energy",
        "description": "Heavier than air.",
    })
}

#[test]
fn valid_sequence_logs_its_length_at_info() {
    let (diagnostics, sink) = Diagnostics::recording(Severity::Debug);
    let records = json!([record("a", "Fuel"), record("b", "Safety"), record("c", "Law")]);

    validate_all(&records, &diagnostics).expect("all records are valid");

    let infos = sink.entries_at(Severity::Info);
    assert_eq!(infos.len(), 1);
    assert_eq!(infos[0].message, "Successfully validated 3 concepts");
    assert_eq!(sink.count_at(Severity::Error), 0);
}

#[test]
fn missing_field_is_named_and_index_reported() {
    let (diagnostics, _sink) = Diagnostics::recording(Severity::Debug);
    let mut broken = record("b", "Fuel");
    broken.as_object_mut().expect("object").remove("description");

    let record_err = validate_record(&broken).expect_err("description is required");
    assert!(record_err
        .to_string()
        .contains("Missing or empty required field: description"));

    let records = json!([record("a", "Fuel"), broken]);
    let err = validate_all(&records, &diagnostics).expect_err("second record is broken");
    match &err {
        ValidationError::RecordAt { index, .. } => assert_eq!(*index, 1),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().starts_with("Validation failed for concept at index 1:"));
    assert_eq!(err.violations(), &[Violation::MissingField("description")]);
}

#[test]
fn empty_string_counts_as_missing() {
    let mut blank = record("a", "Fuel");
    blank["admin"] = json!("");
    let err = validate_record(&blank).expect_err("empty admin is rejected");
    assert_eq!(err.violations(), &[Violation::MissingField("admin")]);
}

#[test]
fn unknown_tier_lists_allowed_values() {
    let err = validate_record(&record("a", "Unknown")).expect_err("tier is not in the set");
    let message = err.to_string();
    assert!(message.contains("Invalid tier: Unknown"));
    assert!(message.contains("Fuel, Safety, Measurement, Law, Combustion"));
}

#[test]
fn tier_match_is_case_sensitive() {
    let err = validate_record(&record("a", "fuel")).expect_err("lowercase tier is rejected");
    assert_eq!(err.violations(), &[Violation::InvalidTier("fuel".to_string())]);
}

#[test]
fn non_text_id_is_rejected() {
    let mut numeric = record("a", "Fuel");
    numeric["id"] = json!(42);
    let err = validate_record(&numeric).expect_err("id must be text");
    assert_eq!(err.violations(), &[Violation::NotText("id")]);
}

#[test]
fn null_record_reports_every_field_missing() {
    let err = validate_record(&Value::Null).expect_err("absent record");
    assert_eq!(err.violations().len(), 8);
    assert!(err
        .violations()
        .iter()
        .all(|violation| matches!(violation, Violation::MissingField(_))));
}

#[test]
fn duplicate_id_is_reported_once() {
    let (diagnostics, _sink) = Diagnostics::recording(Severity::Debug);
    let records = json!([
        record("x", "Fuel"),
        record("x", "Safety"),
        record("x", "Law"),
        record("y", "Law"),
    ]);

    let err = validate_all(&records, &diagnostics).expect_err("x repeats");
    assert_eq!(err, ValidationError::DuplicateIds(vec!["x".to_string()]));
    assert_eq!(err.to_string().matches("x").count(), 1);
}

#[test]
fn structural_failure_aborts_before_duplicate_scan() {
    let (diagnostics, _sink) = Diagnostics::recording(Severity::Debug);
    let records = json!([record("x", "Fuel"), record("x", "Bogus")]);

    let err = validate_all(&records, &diagnostics).expect_err("tier is invalid");
    assert!(matches!(err, ValidationError::RecordAt { index: 1, .. }));
}

#[test]
fn empty_sequence_warns_without_error() {
    let (diagnostics, sink) = Diagnostics::recording(Severity::Debug);

    validate_all(&json!([]), &diagnostics).expect("empty is accepted");

    assert_eq!(sink.count_at(Severity::Warn), 1);
    assert_eq!(sink.count_at(Severity::Error), 0);
    assert_eq!(sink.entries_at(Severity::Warn)[0].message, "Concepts array is empty");
}

#[test]
fn non_sequence_is_rejected() {
    let (diagnostics, _sink) = Diagnostics::recording(Severity::Debug);
    let err = validate_all(&json!({"id": "a"}), &diagnostics).expect_err("object is not a list");
    assert_eq!(err, ValidationError::NotASequence);
    assert_eq!(err.to_string(), "Concepts data must be an array");
}
