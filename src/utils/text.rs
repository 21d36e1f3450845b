use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to a display width, ending in `...` when cut.
pub fn truncate_text_unicode(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    const ELLIPSIS: &str = "...";
    let ellipsis_width = ELLIPSIS.width();

    if max_width <= ellipsis_width {
        return ELLIPSIS[..max_width].to_string();
    }

    let target_width = max_width - ellipsis_width;
    let mut result = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > target_width {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }

    result.push_str(ELLIPSIS);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(truncate_text_unicode("A1", 10), "A1");
        assert_eq!(truncate_text_unicode("", 0), "");
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_text_unicode("Hello, World!", 8), "Hello...");
        assert_eq!(truncate_text_unicode("Hello", 2), "..");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK character is two columns wide
        let truncated = truncate_text_unicode("検索結果の表示", 9);
        assert_eq!(truncated, "検索結...");
        assert!(truncated.width() <= 9);
    }
}
