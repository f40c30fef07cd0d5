//! The per-entity schema tables.
//!
//! Wire spellings here are the service's, verbatim: `rfid_id`, `credits`,
//! `tope`, `parent_id`, `student_id`, `current_credits`. Canonical names
//! match the serde spelling of the records in `rosterpay_core`. A field
//! with `write: None` is one the service does not accept on PATCH; a
//! `create: Never` field is server-assigned or set through a later action
//! (a member's tag is assigned by activation, not at create time).

use rosterpay_core::{
    Branch, ClientAdmin, Guardian, Member, SessionUser, StaffMember, Transaction,
};

use super::{CreateRule, DefaultValue, EntityKind, FieldKind, FieldSpec, Schema, WireEntity};

/// Base spec for table entries; every field overrides what it needs.
const BASE: FieldSpec = FieldSpec {
    canonical: "",
    aliases: &[],
    read: &[],
    write: None,
    write_create: None,
    kind: FieldKind::Str,
    default: DefaultValue::Missing,
    create: CreateRule::Never,
};

impl WireEntity for Member {
    const SCHEMA: &'static Schema = &Schema {
        kind: EntityKind::Member,
        plural_key: "students",
        fields: &[
            FieldSpec {
                canonical: "id",
                read: &["id"],
                kind: FieldKind::Int,
                ..BASE
            },
            // Assigned through activation, not at create time.
            FieldSpec {
                canonical: "identityTag",
                aliases: &["rfid"],
                read: &["rfid_id"],
                write: Some("rfid_id"),
                default: DefaultValue::Str("Pending"),
                ..BASE
            },
            FieldSpec {
                canonical: "name",
                read: &["name"],
                write: Some("name"),
                default: DefaultValue::Str(""),
                create: CreateRule::Required,
                ..BASE
            },
            FieldSpec {
                canonical: "balance",
                read: &["credits"],
                write: Some("credits"),
                kind: FieldKind::Float,
                default: DefaultValue::Float(0.0),
                create: CreateRule::Optional,
                ..BASE
            },
            FieldSpec {
                canonical: "dailyLimit",
                aliases: &["limit", "tope"],
                read: &["tope"],
                write: Some("tope"),
                kind: FieldKind::Float,
                default: DefaultValue::Float(0.0),
                create: CreateRule::Optional,
                ..BASE
            },
            FieldSpec {
                canonical: "active",
                aliases: &["state"],
                read: &["state"],
                write: Some("state"),
                kind: FieldKind::Bool,
                default: DefaultValue::Bool(false),
                ..BASE
            },
            FieldSpec {
                canonical: "ownerGuardianId",
                read: &["parent_id"],
                write: Some("parent_id"),
                kind: FieldKind::Int,
                default: DefaultValue::Null,
                create: CreateRule::Optional,
                ..BASE
            },
            FieldSpec {
                canonical: "ownerStaffId",
                read: &["staff_id"],
                write: Some("staff_id"),
                kind: FieldKind::Int,
                default: DefaultValue::Null,
                create: CreateRule::Optional,
                ..BASE
            },
            FieldSpec {
                canonical: "school",
                read: &["school"],
                write: Some("school"),
                default: DefaultValue::Str(""),
                create: CreateRule::Optional,
                ..BASE
            },
            FieldSpec {
                canonical: "course",
                read: &["course"],
                write: Some("course"),
                default: DefaultValue::Str(""),
                create: CreateRule::Optional,
                ..BASE
            },
        ],
    };
}

impl WireEntity for Guardian {
    const SCHEMA: &'static Schema = &Schema {
        kind: EntityKind::Guardian,
        plural_key: "parents",
        fields: &[
            FieldSpec {
                canonical: "id",
                read: &["id"],
                kind: FieldKind::Int,
                ..BASE
            },
            FieldSpec {
                canonical: "name",
                read: &["name"],
                write: Some("name"),
                default: DefaultValue::Str(""),
                create: CreateRule::Required,
                ..BASE
            },
            FieldSpec {
                canonical: "email",
                read: &["email"],
                write: Some("email"),
                default: DefaultValue::Str(""),
                create: CreateRule::Required,
                ..BASE
            },
            // The service only accepts the branch assignment at create
            // time; reassignment is not part of the PATCH surface.
            FieldSpec {
                canonical: "branchId",
                read: &["branch_id"],
                write_create: Some("branch_id"),
                kind: FieldKind::Int,
                default: DefaultValue::Null,
                create: CreateRule::Optional,
                ..BASE
            },
        ],
    };
}

impl WireEntity for StaffMember {
    const SCHEMA: &'static Schema = &Schema {
        kind: EntityKind::StaffMember,
        plural_key: "staff",
        fields: &[
            FieldSpec {
                canonical: "id",
                read: &["id"],
                kind: FieldKind::Int,
                ..BASE
            },
            FieldSpec {
                canonical: "name",
                read: &["name"],
                write: Some("name"),
                default: DefaultValue::Str(""),
                create: CreateRule::Required,
                ..BASE
            },
            FieldSpec {
                canonical: "email",
                read: &["email"],
                write: Some("email"),
                default: DefaultValue::Str(""),
                create: CreateRule::Required,
                ..BASE
            },
            FieldSpec {
                canonical: "branchId",
                read: &["branch_id"],
                write_create: Some("branch_id"),
                kind: FieldKind::Int,
                default: DefaultValue::Null,
                create: CreateRule::Optional,
                ..BASE
            },
        ],
    };
}

impl WireEntity for Branch {
    const SCHEMA: &'static Schema = &Schema {
        kind: EntityKind::Branch,
        plural_key: "branches",
        fields: &[
            FieldSpec {
                canonical: "id",
                read: &["id"],
                kind: FieldKind::Int,
                ..BASE
            },
            FieldSpec {
                canonical: "name",
                read: &["name"],
                write: Some("name"),
                default: DefaultValue::Str(""),
                create: CreateRule::Required,
                ..BASE
            },
            FieldSpec {
                canonical: "email",
                read: &["email"],
                write: Some("email"),
                default: DefaultValue::Str(""),
                create: CreateRule::Required,
                ..BASE
            },
            FieldSpec {
                canonical: "location",
                read: &["location"],
                write: Some("location"),
                default: DefaultValue::Null,
                create: CreateRule::Optional,
                ..BASE
            },
            FieldSpec {
                canonical: "ownerClientAdminId",
                read: &["client_admin_id"],
                write_create: Some("client_admin_id"),
                kind: FieldKind::Int,
                default: DefaultValue::Null,
                create: CreateRule::Required,
                ..BASE
            },
        ],
    };
}

impl WireEntity for ClientAdmin {
    const SCHEMA: &'static Schema = &Schema {
        kind: EntityKind::ClientAdmin,
        plural_key: "clients",
        fields: &[
            FieldSpec {
                canonical: "id",
                read: &["id"],
                kind: FieldKind::Int,
                ..BASE
            },
            FieldSpec {
                canonical: "name",
                read: &["name"],
                write: Some("name"),
                default: DefaultValue::Str(""),
                create: CreateRule::Required,
                ..BASE
            },
            FieldSpec {
                canonical: "email",
                read: &["email"],
                write: Some("email"),
                default: DefaultValue::Str(""),
                create: CreateRule::Required,
                ..BASE
            },
            FieldSpec {
                canonical: "ownerSuperAdminId",
                read: &["super_admin_id"],
                write_create: Some("super_admin_id"),
                kind: FieldKind::Int,
                default: DefaultValue::Null,
                create: CreateRule::Optional,
                ..BASE
            },
            FieldSpec {
                canonical: "tier",
                read: &["tier"],
                write: Some("tier"),
                default: DefaultValue::Null,
                create: CreateRule::Optional,
                ..BASE
            },
            FieldSpec {
                canonical: "maxMembers",
                aliases: &["maxStudents"],
                read: &["max_students"],
                write: Some("max_students"),
                kind: FieldKind::Int,
                default: DefaultValue::Null,
                create: CreateRule::Optional,
                ..BASE
            },
        ],
    };
}

impl WireEntity for Transaction {
    const SCHEMA: &'static Schema = &Schema {
        kind: EntityKind::Transaction,
        plural_key: "transactions",
        fields: &[
            FieldSpec {
                canonical: "id",
                read: &["id"],
                kind: FieldKind::Int,
                ..BASE
            },
            // The service derives the member from the tag on create.
            FieldSpec {
                canonical: "memberId",
                read: &["student_id"],
                kind: FieldKind::Int,
                ..BASE
            },
            // Read back as `rfid_used`, but the charge endpoint takes the
            // tag as `rfid`.
            FieldSpec {
                canonical: "identityTagUsed",
                aliases: &["rfid"],
                read: &["rfid_used"],
                write_create: Some("rfid"),
                default: DefaultValue::Str(""),
                create: CreateRule::Required,
                ..BASE
            },
            FieldSpec {
                canonical: "product",
                read: &["product"],
                write_create: Some("product"),
                default: DefaultValue::Str(""),
                create: CreateRule::Required,
                ..BASE
            },
            FieldSpec {
                canonical: "price",
                read: &["price"],
                write_create: Some("price"),
                kind: FieldKind::Float,
                default: DefaultValue::Float(0.0),
                create: CreateRule::Required,
                ..BASE
            },
            FieldSpec {
                canonical: "balanceAfter",
                read: &["current_credits"],
                kind: FieldKind::Float,
                default: DefaultValue::Null,
                ..BASE
            },
            FieldSpec {
                canonical: "timestamp",
                read: &["timestamp"],
                default: DefaultValue::Str(""),
                ..BASE
            },
        ],
    };
}

impl WireEntity for SessionUser {
    const SCHEMA: &'static Schema = &Schema {
        kind: EntityKind::SessionUser,
        plural_key: "users",
        fields: &[
            FieldSpec {
                canonical: "id",
                read: &["id", "_id"],
                kind: FieldKind::Int,
                ..BASE
            },
            // Both spellings are alive upstream; `role` wins when they
            // disagree.
            FieldSpec {
                canonical: "role",
                read: &["role", "rol"],
                ..BASE
            },
            FieldSpec {
                canonical: "name",
                read: &["name", "nombre"],
                default: DefaultValue::Str(""),
                ..BASE
            },
            FieldSpec {
                canonical: "email",
                read: &["email"],
                default: DefaultValue::Str(""),
                ..BASE
            },
        ],
    };
}

/// Every schema, for table-level sanity checks.
#[cfg(test)]
pub(super) const ALL_SCHEMAS: &[&Schema] = &[
    Member::SCHEMA,
    Guardian::SCHEMA,
    StaffMember::SCHEMA,
    Branch::SCHEMA,
    ClientAdmin::SCHEMA,
    Transaction::SCHEMA,
    SessionUser::SCHEMA,
];
