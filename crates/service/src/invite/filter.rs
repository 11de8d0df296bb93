//! Filter construction for invite code listings.
//!
//! At most two exact-match criteria, always scoped to live rows. When both a
//! code and a role are given both must match; otherwise the one present is
//! used, and with neither every live row matches.

use models::invite_code::{Column, Model};
use sea_orm::{ColumnTrait, Condition};

use super::domain::InviteCodeFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InviteCodePredicate {
    CodeAndRole { code: String, role: String },
    Code(String),
    Role(String),
    Visible,
}

impl InviteCodePredicate {
    pub fn build(filter: &InviteCodeFilter) -> Self {
        match (non_empty(&filter.code), non_empty(&filter.role)) {
            (Some(code), Some(role)) => Self::CodeAndRole { code, role },
            (Some(code), None) => Self::Code(code),
            (None, Some(role)) => Self::Role(role),
            (None, None) => Self::Visible,
        }
    }

    pub fn condition(&self) -> Condition {
        let live = Condition::all().add(Column::IsDeleted.eq(false));
        match self {
            Self::CodeAndRole { code, role } => live.add(Column::Code.eq(code.as_str())).add(Column::Role.eq(role.as_str())),
            Self::Code(code) => live.add(Column::Code.eq(code.as_str())),
            Self::Role(role) => live.add(Column::Role.eq(role.as_str())),
            Self::Visible => live,
        }
    }

    pub fn matches(&self, m: &Model) -> bool {
        if m.is_deleted {
            return false;
        }
        match self {
            Self::CodeAndRole { code, role } => &m.code == code && &m.role == role,
            Self::Code(code) => &m.code == code,
            Self::Role(role) => &m.role == role,
            Self::Visible => true,
        }
    }
}

fn non_empty(v: &Option<String>) -> Option<String> {
    v.as_deref().filter(|s| !s.is_empty()).map(str::to_string)
}
