//! Tracing utilities and helper macros for observability
//!
//! Spans created here follow the OpenTelemetry semantic conventions used by
//! the rest of the crate, so the JSON file log can be ingested as traces.

use tracing::Span;

/// Create a span for one call to the DelPresence backend
///
/// # Example
/// ```ignore
/// let span = api_request_span!("GET", "/api/admin/courses", request_id);
/// async {
///     // send the request
/// }.instrument(span).await;
/// ```
#[macro_export]
macro_rules! api_request_span {
    ($method:expr, $path:expr, $request_id:expr) => {
        tracing::info_span!(
            "api.request",
            http.method = %$method,
            http.url = %$path,
            request.id = %$request_id,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
            error.message = tracing::field::Empty
        )
    };
}

/// Create a span for client-side business operations
///
/// # Example
/// ```ignore
/// let span = business_span!("roster.add_members", group.id = %group_id);
/// ```
#[macro_export]
macro_rules! business_span {
    ($operation:expr) => {
        tracing::info_span!(
            $operation,
            otel.kind = "internal",
            otel.status_code = tracing::field::Empty,
            error.message = tracing::field::Empty
        )
    };
    ($operation:expr, $($field:tt)*) => {
        tracing::info_span!(
            $operation,
            otel.kind = "internal",
            otel.status_code = tracing::field::Empty,
            error.message = tracing::field::Empty,
            $($field)*
        )
    };
}

/// Record a successful operation on the current span
pub fn record_success() {
    Span::current().record("otel.status_code", "OK");
}

/// Record a failed operation on the current span with an error message
pub fn record_error(message: &str) {
    let span = Span::current();
    span.record("otel.status_code", "ERROR");
    span.record("error.message", message);
}

/// Record HTTP status code on the given span
pub fn record_http_status(span: &Span, status: u16) {
    span.record("http.status_code", status);
    if status >= 400 {
        span.record("otel.status_code", "ERROR");
    } else {
        span.record("otel.status_code", "OK");
    }
}

/// Trait extension for adding context to errors before logging
pub trait ErrorExt {
    /// Log the error and return it unchanged
    fn log_error(self, context: &str) -> Self;
}

impl<T, E: std::fmt::Display> ErrorExt for Result<T, E> {
    fn log_error(self, context: &str) -> Self {
        if let Err(ref e) = self {
            tracing::error!(error = %e, context = context, "Operation failed");
        }
        self
    }
}
