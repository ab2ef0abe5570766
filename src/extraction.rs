//! Pulls Mermaid source out of a free-text LLM reply.
//!
//! Two stages: a fence tagged `mermaid` wins; otherwise the first untagged (or
//! otherwise tagged) fence is used. Unfenced text is never passed through.

use std::sync::LazyLock;

use regex::Regex;

/// ```` ```mermaid ```` immediately followed by a newline, up to the next ```` ``` ````.
static MERMAID_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```mermaid\n(.*?)```").expect("Invalid mermaid fence regex"));

/// Any ```` ``` ```` up to the next ```` ``` ````. The capture keeps a language tag if one is present.
static GENERIC_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").expect("Invalid generic fence regex"));

/// Interior of the first ```` ```mermaid ```` block, if any.
pub fn extract_mermaid_fence(content: &str) -> Option<&str> {
    first_capture(&MERMAID_FENCE, content)
}

/// Interior of the first fenced block of any kind, if any.
pub fn extract_generic_fence(content: &str) -> Option<&str> {
    first_capture(&GENERIC_FENCE, content)
}

/// Both stages in order. `None` means the reply held no usable code.
pub fn extract_mermaid_code(content: &str) -> Option<&str> {
    extract_mermaid_fence(content).or_else(|| extract_generic_fence(content))
}

// An empty interior counts as no match.
fn first_capture<'a>(re: &Regex, content: &'a str) -> Option<&'a str> {
    re.captures(content)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mermaid_fence_returns_exact_interior() {
        let reply = "Here you go:\n```mermaid\nflowchart TD\n    A --> B\n\n  B --> C\n```\nEnjoy.";
        assert_eq!(
            extract_mermaid_code(reply),
            Some("flowchart TD\n    A --> B\n\n  B --> C\n")
        );
    }

    #[test]
    fn mermaid_fence_requires_newline_after_tag() {
        assert_eq!(extract_mermaid_fence("```mermaid pie```"), None);
        // the generic stage still sees it, tag included
        assert_eq!(extract_mermaid_code("```mermaid pie```"), Some("mermaid pie"));
    }

    #[test]
    fn mermaid_fence_preferred_over_earlier_generic_fence() {
        let reply = "```text\nnot this\n```\n\n```mermaid\npie\n```";
        assert_eq!(extract_mermaid_code(reply), Some("pie\n"));
    }

    #[test]
    fn generic_fence_used_when_no_mermaid_tag() {
        assert_eq!(extract_mermaid_code("```X```"), Some("X"));
        assert_eq!(
            extract_generic_fence("intro\n```\ngraph LR\n  A-->B\n```"),
            Some("\ngraph LR\n  A-->B\n")
        );
    }

    #[test]
    fn generic_fence_keeps_other_language_tags() {
        assert_eq!(extract_mermaid_code("```json\n{}\n```"), Some("json\n{}\n"));
    }

    #[test]
    fn first_block_wins() {
        let reply = "```mermaid\nfirst\n```\n```mermaid\nsecond\n```";
        assert_eq!(extract_mermaid_fence(reply), Some("first\n"));
    }

    #[test]
    fn no_fence_yields_nothing() {
        assert_eq!(extract_mermaid_code("flowchart TD\n A --> B"), None);
        assert_eq!(extract_mermaid_code(""), None);
        // an unterminated fence is not a block
        assert_eq!(extract_mermaid_code("```mermaid\npie\n"), None);
    }

    #[test]
    fn empty_interiors_are_not_matches() {
        assert_eq!(extract_mermaid_fence("``````"), None);
        assert_eq!(extract_generic_fence("``````"), None);
        assert_eq!(extract_mermaid_code("``````"), None);
    }
}
