//! Record services for invite codes and user roles.
//! - Translator maps wire records to stored rows and back.
//! - Repositories hide soft-deleted rows; SeaORM and in-memory implementations.
//! - Filter builders turn optional criteria into exact-match predicates.

pub mod errors;
pub mod fixtures;
pub mod ids;
pub mod invite;
pub mod role;
pub mod stream;
#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
pub use fixtures::{FixtureReport, FixtureSeeder};
