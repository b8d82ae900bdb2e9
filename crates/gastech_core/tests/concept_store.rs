use gastech_core::{
    ConceptFilter, ConceptStore, Diagnostics, ErrorHandler, LoadStatus, LookupError, Severity,
    Tier,
};
use serde_json::json;

fn concept(id: &str, tier: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": id,
        "tier": tier,
        "type": "Reference",
        "focus": "Field",
        "admin": "Code",
        "benefit": "Safety",
        "description": "Reference entry.",
    })
}

#[test]
fn missing_id_lookup_logs_error_and_returns_not_found() {
    let (diagnostics, sink) = Diagnostics::recording(Severity::Debug);
    let store = ConceptStore::builtin(&ErrorHandler::new(diagnostics));

    let err = store.find("argon").expect_err("argon is not a concept");
    assert_eq!(err, LookupError::NotFound("argon".to_string()));

    let errors = sink.entries_at(Severity::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("argon"));
}

#[test]
fn lookup_returns_builtin_record() {
    let (diagnostics, _sink) = Diagnostics::recording(Severity::Debug);
    let store = ConceptStore::builtin(&ErrorHandler::new(diagnostics));

    let record = store.find("co").expect("carbon monoxide entry");
    assert_eq!(record.tier, Tier::Safety);
}

#[test]
fn tier_filter_keeps_load_order() {
    let (diagnostics, _sink) = Diagnostics::recording(Severity::Debug);
    let raw = json!([concept("a", "Law"), concept("b", "Fuel"), concept("c", "Law")]);
    let store = ConceptStore::load(&raw, &ErrorHandler::new(diagnostics));

    let laws = store
        .filtered(ConceptFilter::Tier(Tier::Law))
        .into_iter()
        .map(|record| record.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(laws, vec!["a", "c"]);
    assert_eq!(store.filtered(ConceptFilter::All).len(), 3);
}

#[test]
fn failed_validation_notifies_and_keeps_decodable_records() {
    let (diagnostics, sink) = Diagnostics::recording(Severity::Debug);
    let raw = json!([concept("a", "Fuel"), concept("a", "Law"), concept("b", "Plasma")]);
    let store = ConceptStore::load(&raw, &ErrorHandler::new(diagnostics));

    assert_eq!(store.status(), LoadStatus::Degraded);
    assert!(!store.is_validated());
    assert_eq!(store.len(), 2);

    let errors = sink.entries_at(Severity::Error);
    assert!(errors
        .iter()
        .any(|entry| entry.message == "Error in concept data validation"));
    assert!(errors
        .iter()
        .any(|entry| entry.message == "Concepts data validation failed"));
    assert_eq!(sink.count_at(Severity::Warn), 1);
}
