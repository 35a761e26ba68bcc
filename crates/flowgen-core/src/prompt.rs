//! Instruction template sent to the text model.
//!
//! Centralizing the template here makes it easy to tune the requested style
//! without digging through the pipeline code. The styling directives are
//! literal Mermaid `style` lines the model is asked to reproduce verbatim.

/// Build the full prompt for a conversion request.
///
/// `text` is embedded verbatim; this is a pure formatting step with no
/// conditional logic.
pub fn build_prompt(text: &str) -> String {
    format!(
        "\
Convert the following text description into Mermaid.js flowchart syntax.
Apply a gentle, professional style. Use the following rules:

1. Use proper Mermaid syntax.
2. Start with 'flowchart TD'.
3. Use A, B, C... as node IDs.
4. Use diamond shapes (for decision nodes).
5. Use --> arrows to connect.
6. Apply soft pastel colors using Mermaid 'style' lines:
   - Start/End nodes: Light green -> fill:#d4edda
   - Process nodes: Light blue -> fill:#dbeafe
   - Decision nodes: Soft red/pink -> fill:#f8d7da
7. Use format like: style A fill:#d4edda,stroke:#333,stroke-width:1.5px,rx:8px,ry:8px
8. Make it clean and minimal. No extra text.

Text description: {text}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_input_verbatim() {
        let prompt = build_prompt("user logs in, system checks password");
        assert!(prompt.ends_with("Text description: user logs in, system checks password"));
    }

    #[test]
    fn carries_style_directives() {
        let prompt = build_prompt("anything");
        assert!(prompt.contains("fill:#d4edda"));
        assert!(prompt.contains("fill:#dbeafe"));
        assert!(prompt.contains("fill:#f8d7da"));
        assert!(prompt.contains("flowchart TD"));
    }
}
