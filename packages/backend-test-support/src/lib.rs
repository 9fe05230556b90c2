//! Shared helpers for the backend's unit and integration tests.
//!
//! Kept free of backend types so both `#[cfg(test)]` modules and the
//! `tests/` binaries can depend on it without a cycle.

pub mod logging;
pub mod problem_details;
