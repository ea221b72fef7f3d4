//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Manual mocks instead of mockall: the port traits are small, and tests
//! control exactly what each fetch returns without macro magic.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
