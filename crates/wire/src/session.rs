//! The authenticated-user adapter.
//!
//! The service has kept two spellings of the role field alive for
//! backward compatibility (`role` and `rol`), and some deployments still
//! emit `_id`/`nombre` for the user's id and name. This adapter reconciles
//! all of that into one [`SessionUser`] so exactly one canonical `role`
//! value ever reaches the route guard. Neither spelling propagates past
//! this boundary.

use rosterpay_core::SessionUser;
use serde_json::Value;

use crate::normalize::normalize;

/// Normalize the authenticated-user record into a [`SessionUser`].
///
/// Precedence when both role spellings are present and disagree: `role`
/// wins over `rol` (declared, not arbitrary - `role` is the spelling the
/// service is migrating toward). A missing or unrecognized role yields
/// `None`: the route guard cannot authorize a session without a canonical
/// role, and guessing one would be worse than failing the login.
///
/// This adapter performs no authorization itself; `role` is the sole
/// signal it exposes.
#[must_use]
pub fn normalize_session(raw: &Value) -> Option<SessionUser> {
    normalize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosterpay_core::Role;
    use serde_json::json;

    #[test]
    fn test_legacy_spelling_is_reconciled() {
        let user = normalize_session(&json!({
            "id": 7,
            "rol": "branch",
            "name": "A",
            "email": "a@x.com",
        }))
        .expect("normalizes");
        assert_eq!(user.role, Role::Branch);
        assert_eq!(user.id.as_i64(), 7);
    }

    #[test]
    fn test_role_wins_over_rol_when_both_present() {
        let user = normalize_session(&json!({
            "id": 7,
            "role": "client_admin",
            "rol": "branch",
            "name": "A",
            "email": "a@x.com",
        }))
        .expect("normalizes");
        assert_eq!(user.role, Role::ClientAdmin);
    }

    #[test]
    fn test_null_role_falls_through_to_rol() {
        let user = normalize_session(&json!({
            "id": 7,
            "role": null,
            "rol": "staff",
            "name": "A",
            "email": "a@x.com",
        }))
        .expect("normalizes");
        assert_eq!(user.role, Role::Staff);
    }

    #[test]
    fn test_all_five_roles_parse() {
        for (wire, expected) in [
            ("super_admin", Role::SuperAdmin),
            ("client_admin", Role::ClientAdmin),
            ("branch", Role::Branch),
            ("parent", Role::Parent),
            ("staff", Role::Staff),
        ] {
            let user = normalize_session(&json!({"id": 1, "role": wire}))
                .expect("normalizes");
            assert_eq!(user.role, expected);
        }
    }

    #[test]
    fn test_unknown_role_yields_none() {
        assert!(normalize_session(&json!({"id": 1, "role": "teacher"})).is_none());
    }

    #[test]
    fn test_missing_role_yields_none() {
        assert!(normalize_session(&json!({"id": 1, "name": "A"})).is_none());
    }

    #[test]
    fn test_null_input_yields_none() {
        assert!(normalize_session(&Value::Null).is_none());
    }

    #[test]
    fn test_mongo_style_id_and_spanish_name() {
        let user = normalize_session(&json!({
            "_id": 12,
            "rol": "parent",
            "nombre": "Luisa",
        }))
        .expect("normalizes");
        assert_eq!(user.id.as_i64(), 12);
        assert_eq!(user.name, "Luisa");
        assert_eq!(user.email, "");
    }
}
