//! Fixed fallback diagram used when generation or validation fails.

/// The 6-node example graph returned on any conversion failure.
const FALLBACK_TEMPLATE: &str = "\
flowchart TD
    A[Start] --> B[Process Input]
    B --> C{Decision}
    C -->|Yes| D[Action 1]
    C -->|No| E[Action 2]
    D --> F[End]
    E --> F[End]";

/// Build the complete fallback markup for a failed conversion.
///
/// The error detail is appended as a Mermaid `%%` comment line, so the result
/// stays renderable while carrying the diagnostic.
pub fn fallback_markup(error_detail: &str) -> String {
    format!("{FALLBACK_TEMPLATE}\n    \n    %% Error: {error_detail}")
}
