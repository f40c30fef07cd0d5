//! Captured service responses (anonymized), one per envelope quirk.

use serde_json::{Value, json};

/// A guardian's member list, wrapped under the named `students` key.
#[must_use]
pub fn students_named_envelope() -> Value {
    json!({
        "students": [
            {
                "id": 1,
                "name": "Juan",
                "rfid_id": "ABC123",
                "credits": 50.0,
                "tope": 10,
                "state": true,
                "parent_id": 4,
                "staff_id": null,
                "school": "X",
                "course": "5A"
            },
            {
                "id": 2,
                "name": "Ana",
                "credits": 0,
                "parent_id": 4,
                "school": "X",
                "course": "3B"
            }
        ]
    })
}

/// A branch's guardian list, wrapped under the generic `data` key.
#[must_use]
pub fn parents_data_envelope() -> Value {
    json!({
        "data": [
            {"id": 4, "name": "Luisa", "email": "luisa@example.com", "branch_id": 2},
            {"id": 5, "name": "Marco", "email": "marco@example.com", "branch_id": null}
        ]
    })
}

/// A member's transaction history, returned as a bare array.
#[must_use]
pub fn transactions_bare() -> Value {
    json!([
        {
            "id": 31,
            "student_id": 1,
            "rfid_used": "ABC123",
            "product": "lunch",
            "price": 3.5,
            "current_credits": 46.5,
            "timestamp": "2024-05-02T12:30:00Z"
        },
        {
            "id": 30,
            "student_id": 1,
            "rfid_used": "ABC123",
            "product": "snack",
            "price": 1.25,
            "timestamp": "2024-05-01T10:05:00Z"
        }
    ])
}

/// A login body from a deployment still on the legacy spellings.
#[must_use]
pub fn login_legacy() -> Value {
    json!({
        "_id": 12,
        "rol": "parent",
        "nombre": "Luisa",
        "email": "luisa@example.com"
    })
}

/// A login body from a migrated deployment.
#[must_use]
pub fn login_current() -> Value {
    json!({
        "id": 7,
        "role": "branch",
        "name": "Centro",
        "email": "centro@example.com"
    })
}
