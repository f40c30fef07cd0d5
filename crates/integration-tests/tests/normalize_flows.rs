//! Read-path flows: envelope resolution plus normalization, the way list
//! and detail screens consume them.

use rosterpay_core::{Branch, Guardian, Member, Transaction};
use rosterpay_integration_tests::fixtures;
use rosterpay_wire::{normalize, normalize_list};
use serde_json::{Value, json};

#[test]
fn test_guardian_member_list_screen() {
    let members: Vec<Member> = normalize_list(&fixtures::students_named_envelope());
    assert_eq!(members.len(), 2);

    let juan = &members[0];
    assert_eq!(juan.identity_tag, "ABC123");
    assert!((juan.balance - 50.0).abs() < f64::EPSILON);
    assert!((juan.daily_limit - 10.0).abs() < f64::EPSILON);
    assert!(juan.active);
    assert_eq!(juan.owner_guardian_id.map(|id| id.as_i64()), Some(4));
    assert_eq!(juan.owner_staff_id, None);
    assert_eq!(juan.school, "X");
    assert_eq!(juan.course, "5A");

    // Ana has no tag yet and an explicit zero balance.
    let ana = &members[1];
    assert_eq!(ana.identity_tag, "Pending");
    assert!(!ana.has_identity_tag());
    assert!(ana.balance.abs() < f64::EPSILON);
    assert!(!ana.active);
}

#[test]
fn test_same_list_through_every_envelope() {
    let records = json!([
        {"id": 1, "name": "Juan", "rfid_id": "ABC123"},
        {"id": 2, "name": "Ana"},
    ]);
    let bare: Vec<Member> = normalize_list(&records);
    let named: Vec<Member> = normalize_list(&json!({"students": records.clone()}));
    let generic: Vec<Member> = normalize_list(&json!({"data": records}));
    assert_eq!(bare, named);
    assert_eq!(named, generic);
}

#[test]
fn test_guardian_list_under_data_key() {
    let guardians: Vec<Guardian> = normalize_list(&fixtures::parents_data_envelope());
    assert_eq!(guardians.len(), 2);
    assert_eq!(guardians[0].email, "luisa@example.com");
    assert_eq!(guardians[0].branch_id.map(|id| id.as_i64()), Some(2));
    assert_eq!(guardians[1].branch_id, None);
}

#[test]
fn test_transaction_history_bare_array() {
    let history: Vec<Transaction> = normalize_list(&fixtures::transactions_bare());
    assert_eq!(history.len(), 2);
    // Input order is preserved; the service already sorts newest-first.
    assert_eq!(history[0].id.as_i64(), 31);
    assert_eq!(history[0].balance_after, Some(46.5));
    assert_eq!(history[1].balance_after, None);
}

#[test]
fn test_branch_detail_screen() {
    let raw = json!({
        "id": 2,
        "name": "Centro",
        "email": "centro@example.com",
        "location": "Av. Principal 100",
        "client_admin_id": 9
    });
    let branch: Branch = normalize(&raw).expect("normalizes");
    assert_eq!(branch.location.as_deref(), Some("Av. Principal 100"));
    assert_eq!(
        branch.owner_client_admin_id.map(|id| id.as_i64()),
        Some(9)
    );
}

#[test]
fn test_error_page_reads_as_no_records() {
    // An upstream error body must not take the screen down; it reads as
    // an empty list, indistinguishable from "this guardian has no
    // members".
    let error_body = json!({"detail": "Internal Server Error"});
    assert!(normalize_list::<Member>(&error_body).is_empty());
    assert!(normalize_list::<Member>(&Value::Null).is_empty());
}

#[test]
fn test_one_corrupt_record_does_not_sink_the_list() {
    let raw = json!({"students": [
        {"id": 1, "name": "Juan"},
        {"name": "lost its id somewhere"},
        {"id": 3, "name": "Pia"},
    ]});
    let members: Vec<Member> = normalize_list(&raw);
    assert_eq!(members.len(), 2);
    assert_eq!(members[1].id.as_i64(), 3);
}
