//! Builders and fakes shared by unit and integration tests.
//!
//! Compiled into the crate only for its own tests, or for downstream
//! test code via the `testkit` feature.

pub mod clock;
pub mod store;
pub mod wagers;
