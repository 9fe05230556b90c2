//! Infrastructure: database connections, error translation, state assembly.

pub mod db;
pub mod db_errors;
pub mod state;
