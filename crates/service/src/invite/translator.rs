//! Wire record <-> stored record.

use chrono::{DateTime, Duration, DurationRound, Utc};
use models::invite_code;
use uuid::Uuid;

use super::domain::{InviteCode, InviteCodeChanges, InviteCodeUpdate};

/// Build the record to insert. The id is left nil for the repository to
/// assign, `created_at` is always now, flags are taken as sent.
pub fn new_record(input: InviteCode) -> invite_code::Model {
    new_record_at(input, Utc::now())
}

pub(crate) fn new_record_at(input: InviteCode, now: DateTime<Utc>) -> invite_code::Model {
    invite_code::Model {
        id: Uuid::nil(),
        code: input.code,
        role: input.role,
        valid_from: whole_seconds(input.valid_from).into(),
        valid_to: whole_seconds(input.valid_to).into(),
        created_at: now.into(),
        updated_at: None,
        deleted_at: input.deleted_at.map(Into::into),
        is_fixture: input.is_fixture,
        is_test: input.is_test,
        is_deleted: input.is_deleted,
    }
}

pub fn changes(update: InviteCodeUpdate) -> InviteCodeChanges {
    InviteCodeChanges {
        code: update.code,
        role: update.role,
        valid_from: update.valid_from.map(whole_seconds),
        valid_to: update.valid_to.map(whole_seconds),
        updated_at: Utc::now(),
    }
}

pub fn to_wire(model: invite_code::Model) -> InviteCode {
    InviteCode {
        id: model.id.to_string(),
        code: model.code,
        role: model.role,
        valid_from: model.valid_from.with_timezone(&Utc),
        valid_to: model.valid_to.with_timezone(&Utc),
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.map(|t| t.with_timezone(&Utc)),
        deleted_at: model.deleted_at.map(|t| t.with_timezone(&Utc)),
        is_fixture: model.is_fixture,
        is_test: model.is_test,
        is_deleted: model.is_deleted,
    }
}

/// Apply a change set to an in-memory record.
pub(crate) fn apply(model: &mut invite_code::Model, changes: &InviteCodeChanges) {
    if let Some(code) = &changes.code {
        model.code = code.clone();
    }
    if let Some(role) = &changes.role {
        model.role = role.clone();
    }
    if let Some(t) = changes.valid_from {
        model.valid_from = t.into();
    }
    if let Some(t) = changes.valid_to {
        model.valid_to = t.into();
    }
    model.updated_at = Some(changes.updated_at.into());
}

fn whole_seconds(t: DateTime<Utc>) -> DateTime<Utc> {
    t.duration_trunc(Duration::seconds(1)).unwrap_or(t)
}
