use async_trait::async_trait;
use models::user_role;
use uuid::Uuid;

use super::domain::UserRoleChanges;
use super::filter::UserRolePredicate;
use crate::errors::ServiceError;
use crate::stream::RecordStream;

/// Persistence for user roles; same visibility rules as invite codes.
#[async_trait]
pub trait UserRoleRepository: Send + Sync {
    async fn insert(&self, record: user_role::Model) -> Result<Uuid, ServiceError>;
    async fn find_one(&self, id: Uuid) -> Result<user_role::Model, ServiceError>;
    async fn soft_delete(&self, id: Uuid) -> Result<user_role::Model, ServiceError>;
    async fn update(&self, id: Uuid, changes: UserRoleChanges) -> Result<user_role::Model, ServiceError>;
    async fn list_all(&self) -> Result<RecordStream<user_role::Model>, ServiceError>;
    async fn list_filtered(&self, predicate: UserRolePredicate) -> Result<RecordStream<user_role::Model>, ServiceError>;
    async fn purge(&self) -> Result<u64, ServiceError>;
}

pub mod mock {
    use super::*;
    use std::sync::Mutex;

    use crate::role::translator;
    use crate::stream;

    #[derive(Default)]
    pub struct MockUserRoleRepository {
        rows: Mutex<Vec<user_role::Model>>,
    }

    impl MockUserRoleRepository {
        pub fn snapshot(&self) -> Vec<user_role::Model> {
            self.rows.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl UserRoleRepository for MockUserRoleRepository {
        async fn insert(&self, mut record: user_role::Model) -> Result<Uuid, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            if record.id.is_nil() {
                record.id = Uuid::new_v4();
            }
            if rows.iter().any(|r| r.name == record.name || r.id == record.id) {
                return Err(ServiceError::Internal(format!("duplicate key for name {}", record.name)));
            }
            let id = record.id;
            rows.push(record);
            Ok(id)
        }

        async fn find_one(&self, id: Uuid) -> Result<user_role::Model, ServiceError> {
            let rows = self.rows.lock().unwrap();
            rows.iter()
                .find(|r| r.id == id && !r.is_deleted)
                .cloned()
                .ok_or_else(|| ServiceError::not_found("user role"))
        }

        async fn soft_delete(&self, id: Uuid) -> Result<user_role::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|r| r.id == id && !r.is_deleted)
                .ok_or_else(|| ServiceError::not_found("user role"))?;
            row.is_deleted = true;
            row.deleted_at = Some(chrono::Utc::now().into());
            Ok(row.clone())
        }

        async fn update(&self, id: Uuid, changes: UserRoleChanges) -> Result<user_role::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|r| r.id == id && !r.is_deleted)
                .ok_or_else(|| ServiceError::not_found("user role"))?;
            translator::apply(row, &changes);
            Ok(row.clone())
        }

        async fn list_all(&self) -> Result<RecordStream<user_role::Model>, ServiceError> {
            self.list_filtered(UserRolePredicate::Visible).await
        }

        async fn list_filtered(&self, predicate: UserRolePredicate) -> Result<RecordStream<user_role::Model>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(stream::from_vec(rows.iter().filter(|r| predicate.matches(r)).cloned().collect()))
        }

        async fn purge(&self) -> Result<u64, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let n = rows.len() as u64;
            rows.clear();
            Ok(n)
        }
    }
}
