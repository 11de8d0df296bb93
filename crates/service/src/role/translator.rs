use chrono::{DateTime, Utc};
use models::user_role;
use uuid::Uuid;

use super::domain::{UserRole, UserRoleChanges, UserRoleUpdate};

pub fn new_record(input: UserRole) -> user_role::Model {
    new_record_at(input, Utc::now())
}

pub(crate) fn new_record_at(input: UserRole, now: DateTime<Utc>) -> user_role::Model {
    user_role::Model {
        id: Uuid::nil(),
        name: input.name,
        description: input.description,
        app_handle: input.app_handle,
        app_icon: input.app_icon,
        app_color_hex: input.app_color_hex,
        is_locked: input.is_locked,
        is_deleted: input.is_deleted,
        is_fixture: input.is_fixture,
        created_at: now.into(),
        updated_at: None,
        deleted_at: input.deleted_at.map(Into::into),
    }
}

pub fn changes(update: UserRoleUpdate) -> UserRoleChanges {
    UserRoleChanges {
        name: update.name,
        description: update.description,
        app_handle: update.app_handle,
        app_icon: update.app_icon,
        app_color_hex: update.app_color_hex,
        updated_at: Utc::now(),
    }
}

pub fn to_wire(model: user_role::Model) -> UserRole {
    UserRole {
        id: model.id.to_string(),
        name: model.name,
        description: model.description,
        app_handle: model.app_handle,
        app_icon: model.app_icon,
        app_color_hex: model.app_color_hex,
        is_locked: model.is_locked,
        is_deleted: model.is_deleted,
        is_fixture: model.is_fixture,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.map(|t| t.with_timezone(&Utc)),
        deleted_at: model.deleted_at.map(|t| t.with_timezone(&Utc)),
    }
}

pub(crate) fn apply(model: &mut user_role::Model, changes: &UserRoleChanges) {
    let fields = [
        (&mut model.name, &changes.name),
        (&mut model.description, &changes.description),
        (&mut model.app_handle, &changes.app_handle),
        (&mut model.app_icon, &changes.app_icon),
        (&mut model.app_color_hex, &changes.app_color_hex),
    ];
    for (slot, value) in fields {
        if let Some(v) = value {
            slot.clone_from(v);
        }
    }
    model.updated_at = Some(changes.updated_at.into());
}
