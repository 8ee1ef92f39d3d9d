#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary entry point only
use tracing_subscriber as _;

// Silence unused dev-dependency warnings for integration tests
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod handlers;
pub mod routes;

// Re-export primary types
pub use bootstrap::{ServerConfig, start_server};
pub use routes::create_router;
