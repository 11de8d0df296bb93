//! User roles: same layering as invite codes, keyed by a unique name.

pub mod domain;
pub mod filter;
pub mod fixtures;
pub mod repo;
pub mod repository;
pub mod service;
pub mod translator;

pub use service::UserRoleService;
