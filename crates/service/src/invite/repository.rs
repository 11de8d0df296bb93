use async_trait::async_trait;
use models::invite_code;
use uuid::Uuid;

use super::domain::InviteCodeChanges;
use super::filter::InviteCodePredicate;
use crate::errors::ServiceError;
use crate::stream::RecordStream;

/// Persistence for invite codes. Every read and mutation except `insert` and
/// `purge` only sees rows that are not soft-deleted.
#[async_trait]
pub trait InviteCodeRepository: Send + Sync {
    /// Store a record, assigning a fresh id when `record.id` is nil.
    async fn insert(&self, record: invite_code::Model) -> Result<Uuid, ServiceError>;
    async fn find_one(&self, id: Uuid) -> Result<invite_code::Model, ServiceError>;
    /// Flag the record deleted and return its post-update state.
    async fn soft_delete(&self, id: Uuid) -> Result<invite_code::Model, ServiceError>;
    async fn update(&self, id: Uuid, changes: InviteCodeChanges) -> Result<invite_code::Model, ServiceError>;
    async fn list_all(&self) -> Result<RecordStream<invite_code::Model>, ServiceError>;
    async fn list_filtered(&self, predicate: InviteCodePredicate) -> Result<RecordStream<invite_code::Model>, ServiceError>;
    /// Hard-delete every row. Returns the number removed.
    async fn purge(&self) -> Result<u64, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    use crate::invite::translator;
    use crate::stream;

    #[derive(Default)]
    pub struct MockInviteCodeRepository {
        // insertion order doubles as store order
        rows: Mutex<Vec<invite_code::Model>>,
    }

    impl MockInviteCodeRepository {
        /// Every stored row, soft-deleted ones included.
        pub fn snapshot(&self) -> Vec<invite_code::Model> {
            self.rows.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl InviteCodeRepository for MockInviteCodeRepository {
        async fn insert(&self, mut record: invite_code::Model) -> Result<Uuid, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            if record.id.is_nil() {
                record.id = Uuid::new_v4();
            }
            if rows.iter().any(|r| r.code == record.code || r.id == record.id) {
                return Err(ServiceError::Internal(format!("duplicate key for code {}", record.code)));
            }
            let id = record.id;
            rows.push(record);
            Ok(id)
        }

        async fn find_one(&self, id: Uuid) -> Result<invite_code::Model, ServiceError> {
            let rows = self.rows.lock().unwrap();
            rows.iter()
                .find(|r| r.id == id && !r.is_deleted)
                .cloned()
                .ok_or_else(|| ServiceError::not_found("invite code"))
        }

        async fn soft_delete(&self, id: Uuid) -> Result<invite_code::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|r| r.id == id && !r.is_deleted)
                .ok_or_else(|| ServiceError::not_found("invite code"))?;
            row.is_deleted = true;
            row.deleted_at = Some(chrono::Utc::now().into());
            Ok(row.clone())
        }

        async fn update(&self, id: Uuid, changes: InviteCodeChanges) -> Result<invite_code::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|r| r.id == id && !r.is_deleted)
                .ok_or_else(|| ServiceError::not_found("invite code"))?;
            translator::apply(row, &changes);
            Ok(row.clone())
        }

        async fn list_all(&self) -> Result<RecordStream<invite_code::Model>, ServiceError> {
            self.list_filtered(InviteCodePredicate::Visible).await
        }

        async fn list_filtered(&self, predicate: InviteCodePredicate) -> Result<RecordStream<invite_code::Model>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            let matching = rows.iter().filter(|r| predicate.matches(r)).cloned().collect();
            Ok(stream::from_vec(matching))
        }

        async fn purge(&self) -> Result<u64, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let n = rows.len() as u64;
            rows.clear();
            Ok(n)
        }
    }
}
