//! Filter construction for role listings: name and app handle, exact match,
//! live rows only.

use models::user_role::{Column, Model};
use sea_orm::{ColumnTrait, Condition};

use super::domain::UserRoleFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRolePredicate {
    NameAndHandle { name: String, app_handle: String },
    Name(String),
    Handle(String),
    Visible,
}

impl UserRolePredicate {
    pub fn build(filter: &UserRoleFilter) -> Self {
        let name = filter.name.clone().filter(|s| !s.is_empty());
        let handle = filter.app_handle.clone().filter(|s| !s.is_empty());
        match (name, handle) {
            (Some(name), Some(app_handle)) => Self::NameAndHandle { name, app_handle },
            (Some(name), None) => Self::Name(name),
            (None, Some(handle)) => Self::Handle(handle),
            (None, None) => Self::Visible,
        }
    }

    pub fn condition(&self) -> Condition {
        let live = Condition::all().add(Column::IsDeleted.eq(false));
        match self {
            Self::NameAndHandle { name, app_handle } => live
                .add(Column::Name.eq(name.as_str()))
                .add(Column::AppHandle.eq(app_handle.as_str())),
            Self::Name(name) => live.add(Column::Name.eq(name.as_str())),
            Self::Handle(handle) => live.add(Column::AppHandle.eq(handle.as_str())),
            Self::Visible => live,
        }
    }

    pub fn matches(&self, m: &Model) -> bool {
        !m.is_deleted
            && match self {
                Self::NameAndHandle { name, app_handle } => &m.name == name && &m.app_handle == app_handle,
                Self::Name(name) => &m.name == name,
                Self::Handle(handle) => &m.app_handle == handle,
                Self::Visible => true,
            }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    #[test]
    fn empty_strings_count_as_unset() {
        let f = UserRoleFilter { name: Some(String::new()), app_handle: Some("teacher".into()) };
        assert_eq!(UserRolePredicate::build(&f), UserRolePredicate::Handle("teacher".into()));
        let f = UserRoleFilter { name: Some("ROLE_ADMIN".into()), app_handle: None };
        assert_eq!(UserRolePredicate::build(&f), UserRolePredicate::Name("ROLE_ADMIN".into()));
    }

    #[test]
    fn handle_condition_renders() {
        let sql = models::user_role::Entity::find()
            .filter(UserRolePredicate::Handle("admin".into()).condition())
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains(r#""is_deleted" = FALSE"#), "{sql}");
        assert!(sql.contains(r#""app_handle" = 'admin'"#), "{sql}");
        assert!(!sql.contains(r#""name" ="#), "{sql}");
    }
}
