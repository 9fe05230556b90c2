//! Environment-driven configuration.

pub mod db;
pub mod rules;
