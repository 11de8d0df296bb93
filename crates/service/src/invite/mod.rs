//! Invite codes: translator, filter builder, repository and service.

pub mod domain;
pub mod filter;
pub mod fixtures;
pub mod repo;
pub mod repository;
pub mod service;
pub mod token;
pub mod translator;

pub use service::InviteCodeService;
