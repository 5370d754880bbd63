/// Split a description into two display halves.
///
/// The text is trimmed first so trailing whitespace cannot leave an empty
/// second half. Starting at the midpoint (counted in chars), the split point
/// is, in order: just after the first `". "`, the first newline, the first
/// space, or the midpoint itself. Both halves are trimmed.
pub(crate) fn split_description(text: &str) -> (String, String) {
    let text = text.trim();
    let chars = text.chars().count();
    let mid = byte_offset_of_char(text, chars / 2);
    let tail = &text[mid..];

    let at = if let Some(p) = tail.find(". ") {
        mid + p + 1
    } else if let Some(p) = tail.find('\n') {
        mid + p
    } else if let Some(p) = tail.find(' ') {
        mid + p
    } else {
        mid
    };

    let (first, second) = text.split_at(at);
    (first.trim().to_string(), second.trim().to_string())
}

fn byte_offset_of_char(text: &str, n: usize) -> usize {
    text.char_indices()
        .nth(n)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejoined(text: &str) -> String {
        let (a, b) = split_description(text);
        format!("{a}{b}").split_whitespace().collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(split_description(""), (String::new(), String::new()));
    }

    #[test]
    fn test_prefers_sentence_end_after_midpoint() {
        let text = "Bees build hexagonal cells. Only females do the work. The males idle.";
        let (a, b) = split_description(text);
        assert_eq!(a, "Bees build hexagonal cells. Only females do the work.");
        assert_eq!(b, "The males idle.");
    }

    #[test]
    fn test_sentence_end_beats_earlier_newline() {
        // Newline comes first after the midpoint, but ". " has priority.
        let text = "aaaa bbbb cccc dddd\neeee. ffff gggg";
        let (a, b) = split_description(text);
        assert_eq!(a, "aaaa bbbb cccc dddd\neeee.");
        assert_eq!(b, "ffff gggg");
    }

    #[test]
    fn test_falls_back_to_newline() {
        let text = "first line here\nsecond line";
        let (a, b) = split_description(text);
        assert_eq!(a, "first line here");
        assert_eq!(b, "second line");
    }

    #[test]
    fn test_falls_back_to_space() {
        let text = "one two three four five";
        let (a, b) = split_description(text);
        assert_eq!(a, "one two three");
        assert_eq!(b, "four five");
    }

    #[test]
    fn test_hard_midpoint_without_whitespace() {
        assert_eq!(
            split_description("abcdef"),
            ("abc".to_string(), "def".to_string())
        );
    }

    #[test]
    fn test_two_tokens_both_non_empty() {
        let (a, b) = split_description("a b");
        assert_eq!(a, "a");
        assert_eq!(b, "b");
    }

    #[test]
    fn test_surrounding_whitespace_does_not_empty_a_half() {
        assert_eq!(
            split_description("aa bb "),
            ("aa".to_string(), "bb".to_string())
        );
        assert_eq!(
            split_description("\n  one two three\n\n\n\n\n\n"),
            ("one two".to_string(), "three".to_string())
        );
    }

    #[test]
    fn test_multibyte_text_splits_on_char_boundary() {
        let text = "وأوحى ربك إلى النحل أن اتخذي من الجبال بيوتا";
        let (a, b) = split_description(text);
        assert!(!a.is_empty());
        assert!(!b.is_empty());
        assert_eq!(rejoined(text), text.split_whitespace().collect::<String>());

        let (a, b) = split_description("نحلنحل");
        assert_eq!(a, "نحل");
        assert_eq!(b, "نحل");
    }

    #[test]
    fn test_split_preserves_content() {
        let samples = [
            "Iron was sent down. Stars forge it. Meteorites carry it to earth.",
            "Line one\nLine two\nLine three",
            "short",
            "  padded text with spaces  ",
        ];
        for text in samples {
            assert_eq!(
                rejoined(text),
                text.split_whitespace().collect::<String>(),
                "content lost for {text:?}"
            );
        }
    }
}
