//! Summary cleanup
//!
//! Upstream summarization sometimes prepends boilerplate like "Here's a
//! factual summary of the document." Only a leading sentence matching one
//! of the known phrases is dropped; everything else passes through intact.

const INTRO_PHRASES: &[&str] = &[
    "here's a summary",
    "here's a factual summary",
    "here is a summary",
    "here is a factual summary",
    "here\u{2019}s a summary",
    "here\u{2019}s a factual summary",
];

/// Remove a leading boilerplate sentence from a summary, if present.
pub fn clean_summary(summary: &str) -> String {
    let Some((first, rest)) = split_first_sentence(summary) else {
        return summary.to_string();
    };

    let first_lower = first.trim().to_lowercase();
    if INTRO_PHRASES.iter().any(|p| first_lower.starts_with(p)) {
        rest.trim().to_string()
    } else {
        summary.to_string()
    }
}

/// Split at the first ". " sentence boundary; `None` when there is none.
fn split_first_sentence(text: &str) -> Option<(&str, &str)> {
    let boundary = text
        .char_indices()
        .zip(text.chars().skip(1))
        .find(|((_, a), b)| *a == '.' && b.is_whitespace())
        .map(|((i, _), _)| i)?;
    Some((&text[..boundary], &text[boundary + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_intro_sentence() {
        let input = "Here's a summary of the document. The email discusses flight logistics.";
        assert_eq!(
            clean_summary(input),
            "The email discusses flight logistics."
        );
    }

    #[test]
    fn test_drops_factual_variant_with_curly_apostrophe() {
        let input = "Here\u{2019}s a factual summary. Counsel requested records.";
        assert_eq!(clean_summary(input), "Counsel requested records.");
    }

    #[test]
    fn test_keeps_ordinary_first_sentence() {
        let input = "The deposition covers 2015. It names two attorneys.";
        assert_eq!(clean_summary(input), input);
    }

    #[test]
    fn test_single_sentence_untouched() {
        let input = "Here's a summary with no second sentence";
        assert_eq!(clean_summary(input), input);
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(clean_summary(""), "");
    }
}
