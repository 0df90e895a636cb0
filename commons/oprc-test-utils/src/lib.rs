//! Shared test scaffolding: scoped process environment and table-driven cases.

pub mod case;
pub mod env;

pub use case::TestCase;
pub use env::{EnvGuard, EnvScope};
