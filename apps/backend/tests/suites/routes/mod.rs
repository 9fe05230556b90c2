pub mod error_shape;
pub mod healthcheck;
pub mod user_handler;
