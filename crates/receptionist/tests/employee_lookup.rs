use receptionist::directory::{find_employee, EmployeeDirectory, MatchOutcome};
use receptionist::lookup::{
    extract_employee_name, lookup_employee, FunctionCallResponse, LookupResult,
    NameExtractionError,
};
use serde_json::json;

fn extracted(body: serde_json::Value) -> String {
    extract_employee_name(&body)
        .expect("name extracted")
        .value
}

#[test]
fn every_supported_shape_yields_the_name() {
    assert_eq!(extracted(json!({ "employee_name": "Sarah Johnson" })), "Sarah Johnson");
    assert_eq!(
        extracted(json!({ "parameters": { "employee_name": "Lisa Chen" } })),
        "Lisa Chen"
    );
    assert_eq!(extracted(json!({ "args": ["David Martinez"] })), "David Martinez");
    assert_eq!(
        extracted(json!({ "employee_name": "", "parameters": { "employee_name": "Lisa Chen" } })),
        "Lisa Chen"
    );
    assert_eq!(extracted(json!({ "foo": "bar", "note": "Robert Wilson" })), "bar");
}

#[test]
fn empty_body_is_missing_name() {
    assert_eq!(
        extract_employee_name(&json!({})),
        Err(NameExtractionError::MissingName)
    );
    assert_eq!(
        lookup_employee(&EmployeeDirectory::seeded(), &json!({})),
        LookupResult::InvalidRequest
    );
}

#[test]
fn matcher_resolves_partial_and_reports_unknown() {
    let directory = EmployeeDirectory::seeded();

    match directory.resolve("sarah") {
        MatchOutcome::Found(record) => assert_eq!(record.name, "Sarah Johnson"),
        other => panic!("expected Sarah Johnson, got {other:?}"),
    }

    match directory.resolve("Robert Wilson") {
        MatchOutcome::Found(record) => assert!(!record.available),
        other => panic!("expected Robert Wilson, got {other:?}"),
    }

    assert_eq!(
        directory.resolve("Nonexistent Person"),
        MatchOutcome::NotFound("Nonexistent Person".to_string())
    );
}

#[test]
fn lenient_fallback_false_positive_is_preserved() {
    // "bar" is picked ahead of the real name and then fails to match.
    let result = lookup_employee(
        &EmployeeDirectory::seeded(),
        &json!({ "foo": "bar", "note": "Robert Wilson" }),
    );
    assert_eq!(result, LookupResult::NotFound("bar".to_string()));
}

#[test]
fn lookups_do_not_mutate_directory() {
    let directory = EmployeeDirectory::seeded();
    let before = directory.records().to_vec();

    let first = lookup_employee(&directory, &json!({ "args": ["Jennifer"] }));
    let second = lookup_employee(&directory, &json!({ "args": ["Jennifer"] }));

    assert_eq!(first, second);
    assert_eq!(directory.records(), before.as_slice());
}

#[test]
fn wire_response_matches_platform_contract() {
    let directory = EmployeeDirectory::seeded();

    let found = serde_json::to_value(FunctionCallResponse::from(lookup_employee(
        &directory,
        &json!({ "employee_name": "I need to see Lisa Chen please" }),
    )))
    .expect("serializes");
    assert_eq!(
        found,
        json!({
            "success": true,
            "employee_info": {
                "id": "E003",
                "name": "Lisa Chen",
                "department": "HR",
                "location": "Floor 1, Room 105",
                "extension": "1105",
                "available": true,
            },
        })
    );

    let missing = serde_json::to_value(FunctionCallResponse::from(LookupResult::InvalidRequest))
        .expect("serializes");
    assert_eq!(missing["success"], false);
    assert!(missing.get("employee_info").is_none());
}

#[test]
fn find_employee_works_over_custom_directories() {
    let directory = EmployeeDirectory::seeded();
    let mut records = directory.records().to_vec();
    records.reverse();
    let found = find_employee(&records, "floor").map(|record| record.id.0.clone());
    assert_eq!(found, None);
    let found = find_employee(&records, "J").map(|record| record.id.0.clone());
    assert_eq!(found.as_deref(), Some("E005"));
}
