//! Helpers shared by the Freightdesk CLI binary.

use freightdesk_core::validation::FieldErrors;

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Render a validation error map as one aligned `field  message` line each,
/// for inline display under the failed command.
pub fn render_field_errors(errors: &FieldErrors) -> String {
    let width = errors.keys().map(|k| k.len()).max().unwrap_or(0);
    errors
        .iter()
        .map(|(key, message)| format!("  {:width$}  {}", key, message, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}
