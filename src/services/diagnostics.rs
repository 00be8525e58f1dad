use crate::models::error::AppError;

/// Where the stores report failures they swallow.
pub trait DiagnosticSink {
    /// `context` is the component prefix, e.g. `Error fetching trends:`.
    fn error(&self, context: &str, error: &AppError);
}

/// Writes to the browser console.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn error(&self, context: &str, error: &AppError) {
        gloo::console::error!(context, error.to_string());
    }
}
