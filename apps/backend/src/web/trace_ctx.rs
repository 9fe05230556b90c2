//! Task-local trace context for web requests.
//!
//! `RequestTrace` opens the scope for every request, so error responses
//! and log events emitted while the handler runs can pick up the same
//! trace id that is returned in the `x-trace-id` header.

use std::cell::RefCell;

use tokio::task_local;

task_local! {
    static TRACE_ID: RefCell<Option<String>>;
}

/// Trace id used outside of any request scope.
pub const UNKNOWN_TRACE_ID: &str = "unknown";

/// Get the trace_id for the current task, or [`UNKNOWN_TRACE_ID`].
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|cell| cell.borrow().clone())
        .ok()
        .flatten()
        .unwrap_or_else(|| UNKNOWN_TRACE_ID.to_string())
}

/// Run a future with `trace_id` installed as the current trace context.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(RefCell::new(Some(trace_id)), future).await
}
