/// Words allowed in either text area unless the page config says otherwise.
pub const DEFAULT_WORD_LIMIT: usize = 500;

/// Number of whitespace-separated words. Empty or blank text has none.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Keeps the first `max` words, joined by single spaces.
///
/// Text that is already within the limit comes back untouched (including its
/// original spacing and line breaks).
pub fn limit_words(text: &str, max: usize) -> String {
    if text.split_whitespace().nth(max).is_none() {
        return text.to_string();
    }
    text.split_whitespace().take(max).collect::<Vec<_>>().join(" ")
}

pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_has_no_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words("\n\t  \r\n"), 0);
    }

    #[test]
    fn counts_runs_of_non_whitespace() {
        assert_eq!(count_words("hello"), 1);
        assert_eq!(count_words("  hello   world \n again\t"), 3);
        assert_eq!(count_words("a-b_c.d"), 1);
    }

    #[test]
    fn short_text_is_returned_as_is() {
        let text = "  keep\n\nmy   spacing ";
        assert_eq!(limit_words(text, 500), text);
        assert_eq!(limit_words("one two three", 3), "one two three");
    }

    #[test]
    fn long_text_is_cut_and_rejoined() {
        let text = vec!["word"; 600].join("  \n");
        let limited = limit_words(&text, 500);
        assert_eq!(count_words(&limited), 500);
        assert_eq!(limited, vec!["word"; 500].join(" "));
    }

    #[test]
    fn cut_keeps_the_first_words_in_order() {
        assert_eq!(limit_words("  a b\tc d e ", 3), "a b c");
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank(" \n "));
        assert!(!is_blank(" x "));
    }
}
