#![allow(dead_code)]

pub mod app_builder;
pub mod auth;
pub mod state;

pub use app_builder::create_test_app;
pub use state::{memory_state, memory_state_with, sqlite_state, sqlite_state_with};
