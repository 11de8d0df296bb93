use std::sync::Arc;

use futures::StreamExt;
use tracing::{info, instrument};

use super::domain::{UserRole, UserRoleFilter, UserRoleUpdate};
use super::filter::UserRolePredicate;
use super::repository::UserRoleRepository;
use super::translator;
use crate::errors::ServiceError;
use crate::ids::parse_record_id;
use crate::stream::RecordStream;

pub struct UserRoleService<R: UserRoleRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: UserRoleRepository + ?Sized> UserRoleService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repo
    }

    /// # Examples
    /// ```
    /// use service::role::{domain::{UserRole, UserRoleUpdate}, repository::mock::MockUserRoleRepository, UserRoleService};
    /// use std::sync::Arc;
    /// let svc = UserRoleService::new(Arc::new(MockUserRoleRepository::default()));
    /// let role = UserRole { name: "ROLE_EDITOR".into(), app_handle: "editor".into(), ..Default::default() };
    /// let created = tokio_test::block_on(svc.create(role)).unwrap();
    /// let renamed = tokio_test::block_on(svc.update(&created.id, UserRoleUpdate { name: Some("ROLE_AUTHOR".into()), ..Default::default() })).unwrap();
    /// assert_eq!(renamed.name, "ROLE_AUTHOR");
    /// assert_eq!(renamed.app_handle, "editor");
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: UserRole) -> Result<UserRole, ServiceError> {
        let mut record = translator::new_record(input);
        record.id = self.repo.insert(record.clone()).await?;
        info!(id = %record.id, name = %record.name, "user_role_created");
        Ok(translator::to_wire(record))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<UserRole, ServiceError> {
        let id = parse_record_id(id)?;
        Ok(translator::to_wire(self.repo.find_one(id).await?))
    }

    #[instrument(skip(self, update))]
    pub async fn update(&self, id: &str, update: UserRoleUpdate) -> Result<UserRole, ServiceError> {
        let id = parse_record_id(id)?;
        let updated = self.repo.update(id, translator::changes(update)).await?;
        info!(id = %updated.id, name = %updated.name, "user_role_updated");
        Ok(translator::to_wire(updated))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
        let id = parse_record_id(id)?;
        let deleted = self.repo.soft_delete(id).await?;
        info!(id = %deleted.id, name = %deleted.name, "user_role_deleted");
        Ok(deleted.is_deleted)
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<RecordStream<UserRole>, ServiceError> {
        let rows = self.repo.list_all().await?;
        Ok(rows.map(|r| r.map(translator::to_wire)).boxed())
    }

    #[instrument(skip(self))]
    pub async fn list_filtered(&self, filter: UserRoleFilter) -> Result<RecordStream<UserRole>, ServiceError> {
        let rows = self.repo.list_filtered(UserRolePredicate::build(&filter)).await?;
        Ok(rows.map(|r| r.map(translator::to_wire)).boxed())
    }
}
