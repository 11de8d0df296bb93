//! Pieces shared by both record services: wire types for the meta endpoints,
//! the tracing bootstrap and the latency injector used for load tests.

pub mod types;
pub mod utils;
pub mod latency;

pub use latency::LatencyInjector;
pub use types::ServiceKind;
