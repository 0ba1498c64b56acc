/// Number of characters kept before the summary cut.
pub const SUMMARY_MAX_CHARS: usize = 200;

/// Condense text by keeping the first `max_chars` characters.
///
/// Text at or under the limit passes through untouched. Longer text is cut
/// after `max_chars` characters and suffixed with "...", so the condensed
/// form of an over-limit text is always `max_chars + 3` characters long.
/// The cut counts characters, not bytes, so multi-byte scripts never split
/// mid-character.
pub fn condense(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut condensed: String = text.chars().take(max_chars).collect();
    condensed.push_str("...");
    condensed
}
