//! User-visible notices.
//!
//! The panel's only failure surface is a blocking `alert(...)` plus a
//! `console.error(...)` record, emitted as a `<script>` fragment that runs
//! when HTMX swaps it in. A failure fragment carries no out-of-band table
//! swaps, so the previously rendered DOM stays as it was.

/// Escape a string for a single-quoted JS literal inside an emitted script.
fn js_escape(input: &str) -> String {
    input.replace('\\', "\\\\").replace('\'', "\\'")
}

/// A plain blocking notice (validation messages, success confirmations).
pub fn alert_notice(message: &str) -> String {
    format!("<script>alert('{}');</script>", js_escape(message))
}

/// A request-failure notice: console record for later inspection, then the
/// generic user-facing alert.
pub fn failure_notice(context: &str, message: &str) -> String {
    format!(
        "<script>console.error('[pantheon-admin] {}');alert('{}');</script>",
        js_escape(context),
        js_escape(message)
    )
}

/// Diagnostic HTML comment prefixed onto rendered bundles.
pub fn debug_comment(detail: &str) -> String {
    format!("<!-- [pantheon-admin] {} -->", detail)
}
