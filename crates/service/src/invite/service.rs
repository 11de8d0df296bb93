use std::sync::Arc;

use futures::StreamExt;
use tracing::{info, instrument};

use super::domain::{InviteCode, InviteCodeFilter, InviteCodeUpdate};
use super::filter::InviteCodePredicate;
use super::repository::InviteCodeRepository;
use super::translator;
use crate::errors::ServiceError;
use crate::ids::parse_record_id;
use crate::stream::RecordStream;

/// Invite code operations independent of the transport.
pub struct InviteCodeService<R: InviteCodeRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: InviteCodeRepository + ?Sized> InviteCodeService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repo
    }

    /// Store a new invite code and return it with its assigned id.
    ///
    /// # Examples
    /// ```
    /// use service::invite::{domain::InviteCode, repository::mock::MockInviteCodeRepository, InviteCodeService};
    /// use std::sync::Arc;
    /// let svc = InviteCodeService::new(Arc::new(MockInviteCodeRepository::default()));
    /// let input = InviteCode { code: "01J0000000000000000000000A".into(), role: "teacher".into(), ..Default::default() };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert!(!created.id.is_empty());
    /// assert_eq!(created.role, "teacher");
    /// ```
    #[instrument(skip(self, input), fields(code = %input.code, role = %input.role))]
    pub async fn create(&self, input: InviteCode) -> Result<InviteCode, ServiceError> {
        let mut record = translator::new_record(input);
        record.id = self.repo.insert(record.clone()).await?;
        info!(id = %record.id, code = %record.code, "invite_code_created");
        Ok(translator::to_wire(record))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<InviteCode, ServiceError> {
        let id = parse_record_id(id)?;
        let record = self.repo.find_one(id).await?;
        Ok(translator::to_wire(record))
    }

    /// Overwrite the fields present in `update`.
    ///
    /// # Examples
    /// ```
    /// use service::invite::{domain::{InviteCode, InviteCodeUpdate}, repository::mock::MockInviteCodeRepository, InviteCodeService};
    /// use std::sync::Arc;
    /// let svc = InviteCodeService::new(Arc::new(MockInviteCodeRepository::default()));
    /// let created = tokio_test::block_on(svc.create(InviteCode { code: "A".into(), role: "viewer".into(), ..Default::default() })).unwrap();
    /// let patch = InviteCodeUpdate { role: Some("director".into()), ..Default::default() };
    /// let updated = tokio_test::block_on(svc.update(&created.id, patch)).unwrap();
    /// assert_eq!(updated.role, "director");
    /// assert_eq!(updated.code, "A");
    /// ```
    #[instrument(skip(self, update))]
    pub async fn update(&self, id: &str, update: InviteCodeUpdate) -> Result<InviteCode, ServiceError> {
        let id = parse_record_id(id)?;
        let updated = self.repo.update(id, translator::changes(update)).await?;
        info!(id = %updated.id, code = %updated.code, "invite_code_updated");
        Ok(translator::to_wire(updated))
    }

    /// Soft-delete; `Ok(true)` once the record is hidden.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
        let id = parse_record_id(id)?;
        let deleted = self.repo.soft_delete(id).await?;
        info!(id = %deleted.id, code = %deleted.code, "invite_code_deleted");
        Ok(deleted.is_deleted)
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<RecordStream<InviteCode>, ServiceError> {
        let rows = self.repo.list_all().await?;
        Ok(rows.map(|r| r.map(translator::to_wire)).boxed())
    }

    #[instrument(skip(self))]
    pub async fn list_filtered(&self, filter: InviteCodeFilter) -> Result<RecordStream<InviteCode>, ServiceError> {
        let predicate = InviteCodePredicate::build(&filter);
        let rows = self.repo.list_filtered(predicate).await?;
        Ok(rows.map(|r| r.map(translator::to_wire)).boxed())
    }
}
