/// Sentences kept in an article summary.
pub const SUMMARY_SENTENCES: usize = 3;

/// Leading-sentences summary: the first three `". "`-separated pieces,
/// re-joined and terminated with a period.
pub fn summarize(text: &str) -> String {
    let lead: Vec<&str> = text.split(". ").take(SUMMARY_SENTENCES).collect();
    let mut summary = lead.join(". ");
    if !summary.ends_with('.') {
        summary.push('.');
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_three_sentences() {
        let text = "One happened. Two followed. Three closed. Four is dropped. Five too.";
        assert_eq!(summarize(text), "One happened. Two followed. Three closed.");
    }

    #[test]
    fn short_text_is_returned_whole() {
        assert_eq!(summarize("Only one sentence."), "Only one sentence.");
        assert_eq!(summarize("No terminator"), "No terminator.");
    }

    #[test]
    fn does_not_double_the_final_period() {
        assert_eq!(summarize("A. B."), "A. B.");
    }
}
