//! Write-path flows: the payloads the console's forms and actions send.

use rosterpay_core::{Branch, Guardian, Member, StaffMember, Transaction};
use rosterpay_wire::{ChangeSet, WireError, denormalize_for_create, denormalize_for_update};
use serde_json::{Value, json};

#[test]
fn test_member_creation_form() {
    let changes = ChangeSet::new()
        .set("name", "Juan")
        .set("ownerGuardianId", 4)
        .set("balance", 25)
        .set("school", "X")
        .set("course", "5A");
    let payload = denormalize_for_create::<Member>(&changes).expect("builds");

    assert_eq!(payload.get("name"), Some(&json!("Juan")));
    assert_eq!(payload.get("parent_id"), Some(&json!(4)));
    assert_eq!(payload.get("credits"), Some(&json!(25)));
    // The tag is assigned through activation later, never at create time.
    assert!(!payload.contains_key("rfid_id"));
    // Unsupplied optionals stay out of the payload entirely.
    assert!(!payload.contains_key("tope"));
}

#[test]
fn test_member_creation_requires_name() {
    let err = denormalize_for_create::<Member>(&ChangeSet::new().set("school", "X"))
        .expect_err("name is mandatory");
    assert!(matches!(
        err,
        WireError::MissingRequiredField { field: "name", .. }
    ));
}

#[test]
fn test_edit_form_sends_only_what_changed() {
    // The edit modal touched the name and the daily limit; everything
    // else stays out of the PATCH.
    let changes = ChangeSet::new().set("name", "Juan P.").set("limit", 20);
    let payload = denormalize_for_update::<Member>(&changes);
    assert_eq!(payload.len(), 2);
    assert_eq!(payload.get("name"), Some(&json!("Juan P.")));
    assert_eq!(payload.get("tope"), Some(&json!(20)));
}

#[test]
fn test_activation_action() {
    // Activation assigns the physical tag and flips the member on.
    let changes = ChangeSet::new().set("identityTag", "ABC123").set("active", true);
    let payload = denormalize_for_update::<Member>(&changes);
    assert_eq!(payload.get("rfid_id"), Some(&json!("ABC123")));
    assert_eq!(payload.get("state"), Some(&json!(true)));
}

#[test]
fn test_recharge_action() {
    let payload = denormalize_for_update::<Member>(&ChangeSet::new().set("balance", 75.5));
    assert_eq!(payload.len(), 1);
    assert_eq!(payload.get("credits"), Some(&json!(75.5)));
}

#[test]
fn test_detaching_an_owner_sends_explicit_null() {
    let payload =
        denormalize_for_update::<Member>(&ChangeSet::new().clear("ownerGuardianId"));
    assert_eq!(payload.get("parent_id"), Some(&Value::Null));
    assert_eq!(payload.len(), 1);
}

#[test]
fn test_untouched_form_produces_empty_payload() {
    // Legal output; the screen decides to skip the request, not this layer.
    let payload = denormalize_for_update::<Member>(&ChangeSet::new());
    assert!(payload.is_empty());
}

#[test]
fn test_charge_at_the_till() {
    let changes = ChangeSet::new()
        .set("rfid", "ABC123")
        .set("product", "lunch")
        .set("price", 3.5);
    let payload = denormalize_for_create::<Transaction>(&changes).expect("builds");
    assert_eq!(payload.get("rfid"), Some(&json!("ABC123")));
    assert_eq!(payload.get("product"), Some(&json!("lunch")));
    assert_eq!(payload.get("price"), Some(&json!(3.5)));
    assert_eq!(payload.len(), 3);
}

#[test]
fn test_charge_requires_price() {
    let changes = ChangeSet::new().set("rfid", "ABC123").set("product", "lunch");
    let err = denormalize_for_create::<Transaction>(&changes).expect_err("price is mandatory");
    assert!(matches!(
        err,
        WireError::MissingRequiredField { field: "price", .. }
    ));
}

#[test]
fn test_guardian_registration() {
    let changes = ChangeSet::new()
        .set("name", "Luisa")
        .set("email", "luisa@example.com")
        .set("branchId", 2);
    let payload = denormalize_for_create::<Guardian>(&changes).expect("builds");
    assert_eq!(payload.get("branch_id"), Some(&json!(2)));
}

#[test]
fn test_guardian_branch_is_create_only() {
    // The PATCH surface has no branch reassignment; the entry is ignored.
    let payload = denormalize_for_update::<Guardian>(
        &ChangeSet::new().set("email", "new@example.com").set("branchId", 3),
    );
    assert_eq!(payload.len(), 1);
    assert_eq!(payload.get("email"), Some(&json!("new@example.com")));
}

#[test]
fn test_staff_registration_mirrors_guardian() {
    let changes = ChangeSet::new()
        .set("name", "Diego")
        .set("email", "diego@example.com")
        .set("branchId", 2);
    let payload = denormalize_for_create::<StaffMember>(&changes).expect("builds");
    assert_eq!(payload.get("branch_id"), Some(&json!(2)));
    assert_eq!(payload.get("name"), Some(&json!("Diego")));
}

#[test]
fn test_branch_creation_names_its_owner() {
    let changes = ChangeSet::new()
        .set("name", "Centro")
        .set("email", "centro@example.com")
        .set("ownerClientAdminId", 9)
        .set("location", "Av. Principal 100");
    let payload = denormalize_for_create::<Branch>(&changes).expect("builds");
    assert_eq!(payload.get("client_admin_id"), Some(&json!(9)));
    assert_eq!(payload.get("location"), Some(&json!("Av. Principal 100")));
}
