//! Task-local trace context for web requests.
//!
//! `RequestTrace` installs the request's trace id for the lifetime of the
//! downstream future; `AppError` reads it back when rendering problem
//! responses. Code outside a request sees "unknown".

use std::future::Future;

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the request being handled, or "unknown" outside one.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|id| id.clone())
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Run `future` with `trace_id` as the current trace context.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
