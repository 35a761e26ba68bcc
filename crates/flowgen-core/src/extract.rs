//! Extraction and validation of Mermaid markup from raw model output.
//!
//! Models often wrap their answer in a fenced markdown block, sometimes with
//! prose around it. [`extract_markup`] pulls out the inner content of the
//! first fence (tagged `mermaid` or untagged); when no fence is present the
//! trimmed raw text is used as-is.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a fenced block, optionally tagged `mermaid`. Lazy inner match so
/// the first fence wins when several are present.
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```(?:mermaid)?\s*([\s\S]*?)\s*```").expect("fence regex is valid")
});

/// Extract candidate Mermaid markup from a raw model response.
///
/// Returns the trimmed inner content of the first fenced block if one exists,
/// otherwise the trimmed response itself. An unterminated fence does not
/// match and falls through to the raw-text path.
pub fn extract_markup(raw: &str) -> String {
    match FENCE_RE.captures(raw) {
        Some(caps) => caps[1].trim().to_string(),
        None => raw.trim().to_string(),
    }
}

/// Check the candidate for a recognized Mermaid prefix.
///
/// Only a syntactic prefix check: the markup must start with `flowchart` or
/// `graph` (case-sensitive). Nothing beyond the first token is validated.
pub fn is_valid_markup(candidate: &str) -> bool {
    candidate.starts_with("flowchart") || candidate.starts_with("graph")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_fence_returns_trimmed_raw() {
        assert_eq!(
            extract_markup("  flowchart TD\n    A-->B  \n"),
            "flowchart TD\n    A-->B"
        );
    }

    #[test]
    fn tagged_fence_extracts_inner() {
        let raw = "Here is your diagram:\n```mermaid\nflowchart TD\n A-->B\n```\nEnjoy!";
        assert_eq!(extract_markup(raw), "flowchart TD\n A-->B");
    }

    #[test]
    fn untagged_fence_extracts_inner() {
        let raw = "```\ngraph LR\n A-->B\n```";
        assert_eq!(extract_markup(raw), "graph LR\n A-->B");
    }

    #[test]
    fn first_of_multiple_fences_wins() {
        let raw = "```mermaid\nflowchart TD\n A-->B\n```\nand also\n```\ngraph LR\n C-->D\n```";
        assert_eq!(extract_markup(raw), "flowchart TD\n A-->B");
    }

    #[test]
    fn unterminated_fence_falls_through_to_raw() {
        let raw = "```mermaid\nflowchart TD\n A-->B";
        // No closing fence: the raw text (with the opening fence) is returned.
        assert_eq!(extract_markup(raw), raw.trim());
    }

    #[test]
    fn prefix_validation() {
        assert!(is_valid_markup("flowchart TD\n A-->B"));
        assert!(is_valid_markup("graph LR; A-->B"));
        assert!(!is_valid_markup("Here is a flowchart for you"));
        assert!(!is_valid_markup("Flowchart TD")); // case-sensitive
        assert!(!is_valid_markup(""));
    }
}
