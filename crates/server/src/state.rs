use std::sync::Arc;

use common::{LatencyInjector, ServiceKind};
use service::invite::{repository::InviteCodeRepository, InviteCodeService};
use service::role::{repository::UserRoleRepository, UserRoleService};
use service::FixtureSeeder;

pub type InviteCodes = InviteCodeService<dyn InviteCodeRepository>;
pub type UserRoles = UserRoleService<dyn UserRoleRepository>;

/// The record service a process exposes.
#[derive(Clone)]
pub enum RecordService {
    Invite(Arc<InviteCodes>),
    Role(Arc<UserRoles>),
}

impl RecordService {
    pub fn invite(repo: Arc<dyn InviteCodeRepository>) -> Self {
        Self::Invite(Arc::new(InviteCodeService::new(repo)))
    }

    pub fn role(repo: Arc<dyn UserRoleRepository>) -> Self {
        Self::Role(Arc::new(UserRoleService::new(repo)))
    }

    pub fn kind(&self) -> ServiceKind {
        match self {
            Self::Invite(_) => ServiceKind::Invite,
            Self::Role(_) => ServiceKind::Role,
        }
    }

    pub fn fixtures(&self) -> Arc<dyn FixtureSeeder> {
        match self {
            Self::Invite(svc) => svc.clone(),
            Self::Role(svc) => svc.clone(),
        }
    }
}

/// State behind the `/admin` endpoints.
#[derive(Clone)]
pub struct AdminState {
    pub kind: ServiceKind,
    pub fixtures: Arc<dyn FixtureSeeder>,
    pub latency: Arc<LatencyInjector>,
}
